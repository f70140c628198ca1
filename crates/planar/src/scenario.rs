//! Seeded random mooring scenarios for benches and the CLI `generate` command.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::geom::Point;
use crate::mooring::{build_problem, MooringCfg};
use crate::problem::{Problem, ProblemError};

/// Sampling box for source points plus the layout applied afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioCfg {
    pub n_points: usize,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub mooring: MooringCfg,
}

impl Default for ScenarioCfg {
    fn default() -> Self {
        Self {
            n_points: 6,
            x_range: (-100.0, 100.0),
            y_range: (10.0, 200.0),
            mooring: MooringCfg::new(100.0, 150.0),
        }
    }
}

/// Errors from scenario generation.
#[derive(Clone, Debug, PartialEq)]
pub enum ScenarioError {
    /// The sampling box cannot be sampled from.
    InvalidParams { reason: String },
    /// The sampled points did not form a valid problem.
    Problem(ProblemError),
}

impl ScenarioError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid scenario params: {reason}"),
            Self::Problem(err) => write!(f, "scenario layout rejected: {err}"),
        }
    }
}

impl std::error::Error for ScenarioError {}

impl From<ProblemError> for ScenarioError {
    fn from(err: ProblemError) -> Self {
        Self::Problem(err)
    }
}

impl ScenarioCfg {
    /// Both ranges must be finite with `lo < hi`.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        for (axis, (lo, hi)) in [("x_range", self.x_range), ("y_range", self.y_range)] {
            if !(lo.is_finite() && hi.is_finite()) {
                return Err(ScenarioError::invalid(format!("{axis} bounds must be finite")));
            }
            if lo >= hi {
                return Err(ScenarioError::invalid(format!(
                    "{axis} needs lo < hi, got ({lo}, {hi})"
                )));
            }
        }
        Ok(())
    }
}

/// Uniform source points; same `(cfg, seed)` gives the same points.
pub fn random_sources(cfg: &ScenarioCfg, seed: u64) -> Result<Vec<Point>, ScenarioError> {
    cfg.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..cfg.n_points)
        .map(|_| {
            Point::new(
                rng.gen_range(cfg.x_range.0..cfg.x_range.1),
                rng.gen_range(cfg.y_range.0..cfg.y_range.1),
            )
        })
        .collect())
}

/// Random sources run through the mooring layout.
pub fn random_problem(cfg: &ScenarioCfg, seed: u64) -> Result<Problem, ScenarioError> {
    Ok(build_problem(&random_sources(cfg, seed)?, cfg.mooring)?)
}
