//! Point and segment value types plus the geometry tolerance.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::predicates::segments_intersect;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeomCfg {
    /// Endpoints closer than `eps` (Euclidean) are treated as shared.
    pub eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps: 1e-9 }
    }
}

/// Straight piece of a path from `p1` to `p2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Same segment traversed the other way.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            p1: self.p2,
            p2: self.p1,
        }
    }

    #[inline]
    pub fn crosses(&self, other: &Segment, cfg: GeomCfg) -> bool {
        segments_intersect(self.p1, self.p2, other.p1, other.p2, cfg.eps)
    }
}
