//! Search bindings: `find_solution_single_target`, `connect_points` and the
//! single-release `SolutionResult`.

use planar::api::{
    build_problem, search, GeomCfg, MooringCfg, Point, Problem, SearchCfg, SolutionSlot,
};
use pyo3::prelude::*;

use crate::common::{map_problem_err, map_release_err};

/// Search result owned by Python. Call `release()` exactly once when done.
#[pyclass(module = "planar_native")]
pub struct SolutionResult {
    slot: SolutionSlot,
}

#[pymethods]
impl SolutionResult {
    #[getter]
    fn found(&self) -> PyResult<bool> {
        Ok(self.slot.get().map_err(map_release_err)?.is_found())
    }

    #[getter]
    fn attempts(&self) -> PyResult<u64> {
        Ok(self.slot.get().map_err(map_release_err)?.attempts())
    }

    /// `"found"`, `"exhausted"` or `"capped"`.
    #[getter]
    fn outcome(&self) -> PyResult<String> {
        let outcome = self.slot.get().map_err(map_release_err)?.outcome();
        Ok(format!("{outcome:?}").to_lowercase())
    }

    /// Above-source position → via index, or `None` when nothing was found.
    #[getter]
    fn b_permutation(&self) -> PyResult<Option<Vec<usize>>> {
        Ok(self
            .slot
            .get()
            .map_err(map_release_err)?
            .permutation()
            .map(<[usize]>::to_vec))
    }

    #[getter]
    fn released(&self) -> bool {
        self.slot.is_released()
    }

    /// Free the result. Raises `ValueError` when called a second time.
    fn release(&mut self) -> PyResult<()> {
        self.slot.release().map(drop).map_err(map_release_err)
    }

    fn __repr__(&self) -> String {
        match self.slot.get() {
            Ok(s) => format!(
                "SolutionResult(outcome={:?}, attempts={}, b_permutation={:?})",
                s.outcome(),
                s.attempts(),
                s.permutation()
            ),
            Err(_) => "SolutionResult(<released>)".to_string(),
        }
    }
}

fn run(problem: &Problem, max_iterations: i64, parallel: bool) -> SolutionResult {
    let scfg = SearchCfg::with_max_iterations(max_iterations).parallel(parallel);
    SolutionResult {
        slot: SolutionSlot::new(search(problem, GeomCfg::default(), scfg)),
    }
}

/// Search for a crossing-free via assignment towards one target.
///
/// `max_iterations <= 0` means unlimited. Invalid lengths or indices raise `ValueError`.
#[pyfunction]
#[allow(clippy::too_many_arguments)]
#[pyo3(signature = (
    points_a_x, points_a_y, idx_above, idx_below, points_b_x, points_b_y,
    target_x, target_y, max_iterations = 0, parallel = false
))]
pub fn find_solution_single_target(
    py: Python<'_>,
    points_a_x: Vec<f64>,
    points_a_y: Vec<f64>,
    idx_above: Vec<i64>,
    idx_below: Vec<i64>,
    points_b_x: Vec<f64>,
    points_b_y: Vec<f64>,
    target_x: f64,
    target_y: f64,
    max_iterations: i64,
    parallel: bool,
) -> PyResult<SolutionResult> {
    let problem = Problem::from_arrays(
        &points_a_x,
        &points_a_y,
        &idx_above,
        &idx_below,
        &points_b_x,
        &points_b_y,
        (target_x, target_y),
    )
    .map_err(map_problem_err)?;
    Ok(py.allow_threads(|| run(&problem, max_iterations, parallel)))
}

/// Mooring layout in one call: returns `(connections or None, attempts)`.
///
/// Connections hold one polyline per input point; above points pass through
/// their via, below points go straight to the target.
#[pyfunction]
#[pyo3(signature = (points, midship, mooring_offset, spacing = 50.0, max_iterations = 0))]
pub fn connect_points(
    py: Python<'_>,
    points: Vec<(f64, f64)>,
    midship: f64,
    mooring_offset: f64,
    spacing: f64,
    max_iterations: i64,
) -> PyResult<(Option<Vec<Vec<(f64, f64)>>>, u64)> {
    let sources: Vec<Point> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
    let cfg = MooringCfg {
        spacing,
        ..MooringCfg::new(midship, mooring_offset)
    };
    let problem = build_problem(&sources, cfg).map_err(map_problem_err)?;
    let mut result = py.allow_threads(|| run(&problem, max_iterations, false));
    let solution = result.slot.release().map_err(map_release_err)?;
    let lines = solution.permutation().map(|perm| {
        planar::api::connections(&problem, perm)
            .into_iter()
            .map(|line| line.into_iter().map(|p| (p.x, p.y)).collect())
            .collect()
    });
    Ok((lines, solution.attempts()))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_class::<SolutionResult>()?;
    m.add_function(wrap_pyfunction!(find_solution_single_target, m)?)?;
    m.add_function(wrap_pyfunction!(connect_points, m)?)?;
    Ok(())
}
