//! Sequential driver.

use tracing::{debug, trace};

use crate::feasibility::{assignment_fits, segment_count, AcceptedSet};
use crate::geom::GeomCfg;
use crate::permutation::{identity, next_permutation};
use crate::problem::Problem;
use crate::report::Solution;

use super::parallel::search_parallel;
use super::types::{Attempt, SearchCfg};

/// Run the search, dispatching on `scfg.parallel`.
pub fn search(problem: &Problem, cfg: GeomCfg, scfg: SearchCfg) -> Solution {
    if scfg.parallel {
        search_parallel(problem, cfg, scfg)
    } else {
        search_sequential(problem, cfg, scfg)
    }
}

/// Convenience: default tolerance, sequential, optional cap (non-positive = none).
pub fn search_with_defaults(problem: &Problem, max_iterations: i64) -> Solution {
    search(
        problem,
        GeomCfg::default(),
        SearchCfg::with_max_iterations(max_iterations),
    )
}

/// Single-threaded lexicographic search.
pub fn search_sequential(problem: &Problem, cfg: GeomCfg, scfg: SearchCfg) -> Solution {
    debug!(
        n_above = problem.n_above(),
        n_below = problem.n_below(),
        max_iterations = ?scfg.max_iterations,
        "search start"
    );
    let solution = SearchRunner::new(problem, cfg, scfg).run();
    debug!(
        outcome = ?solution.outcome(),
        attempts = solution.attempts(),
        "search done"
    );
    solution
}

/// Owns the permutation state, the accepted set and the attempt counter.
struct SearchRunner<'a> {
    problem: &'a Problem,
    max_iterations: Option<u64>,
    perm: Vec<usize>,
    accepted: AcceptedSet,
    attempts: u64,
}

impl<'a> SearchRunner<'a> {
    fn new(problem: &'a Problem, cfg: GeomCfg, scfg: SearchCfg) -> Self {
        Self {
            problem,
            max_iterations: scfg.max_iterations,
            perm: identity(problem.n_above()),
            accepted: AcceptedSet::with_capacity(cfg, segment_count(problem)),
            attempts: 0,
        }
    }

    fn run(&mut self) -> Solution {
        loop {
            match self.attempt() {
                Attempt::Accepted => {
                    return Solution::found(self.perm.clone().into_boxed_slice(), self.attempts)
                }
                Attempt::Capped => return Solution::capped(self.attempts),
                Attempt::Rejected => {
                    trace!(attempt = self.attempts, perm = ?self.perm, "rejected");
                }
            }
            if !next_permutation(&mut self.perm) {
                return Solution::exhausted(self.attempts);
            }
        }
    }

    /// Count, poll the cap, then evaluate the current permutation.
    fn attempt(&mut self) -> Attempt {
        self.attempts += 1;
        if let Some(cap) = self.max_iterations {
            if self.attempts > cap {
                return Attempt::Capped;
            }
        }
        if assignment_fits(self.problem, &self.perm, &mut self.accepted) {
            Attempt::Accepted
        } else {
            Attempt::Rejected
        }
    }
}
