//! Curated surface for the CLI and the Python bindings (UNSTABLE).
//!
//! Not a public API; re-exports change together with the crate.

// Geometry kernel
pub use crate::geom::{near_equal, orientation, segments_intersect, GeomCfg, Point, Segment};
// Input and layout
pub use crate::mooring::{build_problem, MooringCfg};
pub use crate::problem::{Group, Problem, ProblemError};
pub use crate::scenario::{random_problem, random_sources, ScenarioCfg, ScenarioError};
// Search
pub use crate::feasibility::{segment_intersects_any, AcceptedSet};
pub use crate::permutation::{factorial, next_permutation, nth_permutation};
pub use crate::route::{build_path, connections, Route};
pub use crate::search::{
    search, search_parallel, search_sequential, search_with_defaults, SearchCfg,
};
// Results
pub use crate::report::{Outcome, ReleaseError, Solution, SolutionSlot};
pub use crate::verify::{expand_segments, verify_assignment};
