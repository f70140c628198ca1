//! Orientation and crossing predicates.
//!
//! Plain double arithmetic; these are not robust predicates. Callers rely on
//! the shared-endpoint rule in `segments_intersect` for paths meeting at a
//! via point or at the target.

use super::types::Point;

/// True when `a → b → c` turns counter-clockwise.
///
/// Collinear triples (zero cross product) return `false`.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> bool {
    (c.y - a.y) * (b.x - a.x) - (b.y - a.y) * (c.x - a.x) > 0.0
}

/// Squared distance below `eps²`.
#[inline]
pub fn near_equal(p: Point, q: Point, eps: f64) -> bool {
    (p - q).norm_squared() < eps * eps
}

/// Proper crossing test for segments `p1p2` and `p3p4`.
///
/// Segments sharing an endpoint (within `eps`) never cross, whatever the
/// rest of their geometry.
pub fn segments_intersect(p1: Point, p2: Point, p3: Point, p4: Point, eps: f64) -> bool {
    if near_equal(p1, p3, eps)
        || near_equal(p1, p4, eps)
        || near_equal(p2, p3, eps)
        || near_equal(p2, p4, eps)
    {
        return false;
    }
    orientation(p1, p3, p4) != orientation(p2, p3, p4)
        && orientation(p1, p2, p3) != orientation(p1, p2, p4)
}
