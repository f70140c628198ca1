//! Planar geometry kernel: points, segments, and the crossing predicate.
//!
//! Purpose
//! - Provide the three primitives the route search needs: an orientation test,
//!   tolerance-bounded point equality, and a segment crossing predicate.
//! - Keep everything plain `f64` with one explicit tolerance (`GeomCfg::eps`).
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>` (aliased as `Point`).
//! - Collinear triples are "not counter-clockwise"; there is no exact
//!   degeneracy handling. Two segments touching only at a shared endpoint
//!   never count as crossing.
//!
//! Code cross-refs: `crate::feasibility::AcceptedSet`, `crate::route::RoutePath`.

mod predicates;
mod types;

pub use predicates::{near_equal, orientation, segments_intersect};
pub use types::{GeomCfg, Point, Segment};

#[cfg(test)]
mod tests;
