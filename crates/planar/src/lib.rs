//! Non-crossing via assignment for routes converging on a shared target.
//!
//! Sources of the "above" group reach the target through one via point each,
//! "below" sources run straight to it. The search walks via permutations in
//! lexicographic order and returns the first one whose paths do not cross.
//!
//! Layout
//! - `geom`: points, segments, orientation and crossing predicates.
//! - `problem`: validated input (boundary preconditions).
//! - `route`, `feasibility`: route → segments, incremental crossing check.
//! - `permutation`, `search`: enumerator and drivers (sequential, rayon).
//! - `report`: `Solution` and the single-release `SolutionSlot`.
//! - `verify`, `mooring`, `scenario`: re-checking, layout helper, random inputs.

pub mod api;
pub mod feasibility;
pub mod geom;
pub mod mooring;
pub mod permutation;
pub mod problem;
pub mod report;
pub mod route;
pub mod scenario;
pub mod search;
pub mod verify;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{GeomCfg, Point, Segment};
    pub use crate::mooring::{build_problem, MooringCfg};
    pub use crate::problem::{Problem, ProblemError};
    pub use crate::report::{Outcome, Solution};
    pub use crate::search::{search, search_with_defaults, SearchCfg};
}
