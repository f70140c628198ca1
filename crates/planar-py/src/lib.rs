//! PyO3 bindings for the `planar` search.
//!
//! Notes
//! - Keep bindings thin: arrays in, a `SolutionResult` object out.
//! - The result owns the permutation buffer until `release()`; after that every
//!   accessor raises `ValueError` instead of reading freed data.

use pyo3::prelude::*;

mod common;
mod geom;
mod solver;

#[pymodule]
fn planar_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", planar::VERSION)?;
    geom::register(m)?;
    solver::register(m)?;
    Ok(())
}
