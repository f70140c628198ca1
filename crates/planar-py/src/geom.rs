//! Geometry predicate bindings (handy for plotting and debugging from Python).

use nalgebra::Vector2;
use pyo3::prelude::*;

type Xy = (f64, f64);

fn v(p: Xy) -> Vector2<f64> {
    Vector2::new(p.0, p.1)
}

/// True when `a → b → c` turns counter-clockwise (collinear is `False`).
#[pyfunction]
pub fn orientation(a: Xy, b: Xy, c: Xy) -> bool {
    planar::api::orientation(v(a), v(b), v(c))
}

/// Crossing test for `p1p2` and `p3p4`; shared endpoints never cross.
#[pyfunction]
#[pyo3(signature = (p1, p2, p3, p4, eps = 1e-9))]
pub fn segments_intersect(p1: Xy, p2: Xy, p3: Xy, p4: Xy, eps: f64) -> bool {
    planar::api::segments_intersect(v(p1), v(p2), v(p3), v(p4), eps)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(orientation, m)?)?;
    m.add_function(wrap_pyfunction!(segments_intersect, m)?)?;
    Ok(())
}
