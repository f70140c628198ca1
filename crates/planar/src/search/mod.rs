//! Via-assignment search: lexicographic permutation walk with incremental pruning.
//!
//! Purpose
//! - Find the first permutation (lexicographic order) of via points such that
//!   the above routes (source → via → target) and the below routes
//!   (source → target) are pairwise non-crossing.
//! - Stop on first success, on exhaustion of all `n_above!` orderings, or when
//!   the attempt counter passes the configured cap.
//!
//! Design
//! - One attempt = one permutation. Routes are checked segment by segment and
//!   an attempt is abandoned at the first crossing.
//! - The per-attempt step returns `Attempt::{Accepted, Rejected, Capped}`; the
//!   driver loop only reacts to that value.
//! - `search_parallel` splits the lexicographic index space into chunks for
//!   rayon workers (each with its own accepted set) and keeps the
//!   lexicographically first solution, so both drivers report the same result.
//!
//! Code cross-refs: `crate::feasibility::assignment_fits`,
//! `crate::permutation::{next_permutation, nth_permutation}`, `crate::report::Solution`.

mod driver;
mod parallel;
mod types;

pub use driver::{search, search_sequential, search_with_defaults};
pub use parallel::search_parallel;
pub use types::{Attempt, SearchCfg};

#[cfg(test)]
mod tests;
