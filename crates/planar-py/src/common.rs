use planar::api::{ProblemError, ReleaseError};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn map_problem_err(err: ProblemError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn map_release_err(err: ReleaseError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
