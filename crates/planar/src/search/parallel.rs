//! Rayon driver over chunks of the lexicographic index space.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::feasibility::{assignment_fits, segment_count, AcceptedSet};
use crate::geom::GeomCfg;
use crate::permutation::{factorial, next_permutation, nth_permutation};
use crate::problem::Problem;
use crate::report::Solution;

use super::driver::search_sequential;
use super::types::SearchCfg;

/// Parallel search with the same result as `search_sequential`.
///
/// The ranks `0..min(n!, cap)` are split into `chunk_len` pieces; `find_map_first`
/// returns the hit from the earliest chunk, i.e. the lexicographically first
/// solution. Attempts are reported as the sequential driver would count them.
/// Falls back to the sequential driver when `n!` overflows and no cap is set.
pub fn search_parallel(problem: &Problem, cfg: GeomCfg, scfg: SearchCfg) -> Solution {
    let n = problem.n_above();
    let total = factorial(n);
    let space = match (total, scfg.max_iterations) {
        (Some(t), Some(cap)) => t.min(cap),
        (Some(t), None) => t,
        (None, Some(cap)) => cap,
        (None, None) => {
            warn!(n_above = n, "permutation space exceeds u64, searching sequentially");
            return search_sequential(problem, cfg, scfg);
        }
    };
    let chunk_len = scfg.chunk_len.max(1);
    let n_chunks = space.div_ceil(chunk_len);
    let Ok(n_chunks) = usize::try_from(n_chunks) else {
        warn!(n_chunks, "too many chunks for this platform, searching sequentially");
        return search_sequential(problem, cfg, scfg);
    };
    debug!(
        n_above = n,
        n_below = problem.n_below(),
        space,
        n_chunks,
        "parallel search start"
    );

    let hit = (0..n_chunks).into_par_iter().find_map_first(|chunk| {
        let start = chunk as u64 * chunk_len;
        let end = (start + chunk_len).min(space);
        let mut perm = nth_permutation(n, start)?;
        let mut accepted = AcceptedSet::with_capacity(cfg, segment_count(problem));
        for rank in start..end {
            if assignment_fits(problem, &perm, &mut accepted) {
                return Some((rank, perm));
            }
            next_permutation(&mut perm);
        }
        None
    });

    let solution = match hit {
        Some((rank, perm)) => Solution::found(perm.into_boxed_slice(), rank + 1),
        None => match (total, scfg.max_iterations) {
            (Some(t), Some(cap)) if cap < t => Solution::capped(cap + 1),
            (None, Some(cap)) => Solution::capped(cap + 1),
            _ => Solution::exhausted(space),
        },
    };
    debug!(
        outcome = ?solution.outcome(),
        attempts = solution.attempts(),
        "parallel search done"
    );
    solution
}
