//! Route → segment translation.
//!
//! An above route runs source → via → target (two segments), a below route
//! runs source → target (one segment). Stateless; indices are trusted because
//! `Problem` validated them.

use crate::geom::{Point, Segment};
use crate::problem::Problem;

/// Index-based description of how one source reaches the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// `source` is a global source index, `via` an index into the via points.
    Above { source: usize, via: usize },
    Below { source: usize },
}

/// The one or two segments of a route, without heap allocation.
#[derive(Clone, Copy, Debug)]
pub struct RoutePath {
    segs: [Segment; 2],
    len: usize,
}

impl RoutePath {
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segs[..self.len]
    }
}

/// Translate a route into its segments.
#[inline]
pub fn build_path(problem: &Problem, route: Route) -> RoutePath {
    let target = problem.target();
    match route {
        Route::Above { source, via } => {
            let a = problem.sources()[source];
            let b = problem.vias()[via];
            RoutePath {
                segs: [Segment::new(a, b), Segment::new(b, target)],
                len: 2,
            }
        }
        Route::Below { source } => {
            let a = problem.sources()[source];
            let seg = Segment::new(a, target);
            RoutePath {
                segs: [seg, seg],
                len: 1,
            }
        }
    }
}

/// All routes for a via assignment: above sources in order, then below sources.
pub fn routes<'a>(problem: &'a Problem, perm: &'a [usize]) -> impl Iterator<Item = Route> + 'a {
    let above = problem
        .above()
        .iter()
        .zip(perm)
        .map(|(&source, &via)| Route::Above { source, via });
    let below = problem
        .below()
        .iter()
        .map(|&source| Route::Below { source });
    above.chain(below)
}

/// Expand an assignment into one polyline per source point, indexed by global
/// source index. Sources in neither group get an empty polyline.
pub fn connections(problem: &Problem, perm: &[usize]) -> Vec<Vec<Point>> {
    let mut out = vec![Vec::new(); problem.sources().len()];
    let target = problem.target();
    for route in routes(problem, perm) {
        match route {
            Route::Above { source, via } => {
                out[source] = vec![problem.sources()[source], problem.vias()[via], target];
            }
            Route::Below { source } => {
                out[source] = vec![problem.sources()[source], target];
            }
        }
    }
    out
}
