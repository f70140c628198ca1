//! Search configuration and per-attempt outcome.

use serde::{Deserialize, Serialize};

/// Search configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCfg {
    /// Stop once more than this many attempts were started. `None` = unlimited.
    pub max_iterations: Option<u64>,
    /// Use the rayon driver.
    pub parallel: bool,
    /// Permutations per parallel work item.
    pub chunk_len: u64,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            max_iterations: None,
            parallel: false,
            chunk_len: 4096,
        }
    }
}

impl SearchCfg {
    /// Boundary convention: a non-positive limit means "no cap".
    pub fn with_max_iterations(limit: i64) -> Self {
        Self {
            max_iterations: u64::try_from(limit).ok().filter(|&l| l > 0),
            ..Self::default()
        }
    }

    pub fn parallel(mut self, on: bool) -> Self {
        self.parallel = on;
        self
    }
}

/// Result of evaluating one permutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attempt {
    /// Every route fits without crossings.
    Accepted,
    /// Some segment crossed an accepted one.
    Rejected,
    /// The attempt counter passed `max_iterations`; no geometry was evaluated.
    Capped,
}
