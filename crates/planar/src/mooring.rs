//! Mooring layout: derive a search problem from raw source points.
//!
//! Points strictly above the midship line route through via points laid out
//! along that line, starting at the mooring offset and `spacing` apart; the
//! rest run straight to the target.

use serde::{Deserialize, Serialize};

use crate::geom::Point;
use crate::problem::{Problem, ProblemError};

/// Layout parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MooringCfg {
    /// `y` of the midship line; sources with `y > midship_y` go above.
    pub midship_y: f64,
    /// `x` of the first via point.
    pub mooring_offset: f64,
    /// Distance between consecutive via points.
    pub spacing: f64,
    pub target: (f64, f64),
}

impl MooringCfg {
    pub fn new(midship_y: f64, mooring_offset: f64) -> Self {
        Self {
            midship_y,
            mooring_offset,
            ..Self::default()
        }
    }
}

impl Default for MooringCfg {
    fn default() -> Self {
        Self {
            midship_y: 0.0,
            mooring_offset: 0.0,
            spacing: 50.0,
            target: (0.0, 0.0),
        }
    }
}

/// Partition `points` by the midship line and place one via per above source.
pub fn build_problem(points: &[Point], cfg: MooringCfg) -> Result<Problem, ProblemError> {
    let (above, below): (Vec<usize>, Vec<usize>) =
        (0..points.len()).partition(|&i| points[i].y > cfg.midship_y);
    let vias = (0..above.len())
        .map(|i| Point::new(cfg.mooring_offset + cfg.spacing * i as f64, cfg.midship_y))
        .collect();
    Problem::new(
        points.to_vec(),
        above,
        below,
        vias,
        Point::new(cfg.target.0, cfg.target.1),
    )
}
