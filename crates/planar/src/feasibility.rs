//! Incremental non-crossing check over the segments accepted so far.

use crate::geom::{GeomCfg, Segment};
use crate::problem::Problem;
use crate::route::{build_path, routes, RoutePath};

/// True if `candidate` crosses any segment in `accepted` (first hit wins).
#[inline]
pub fn segment_intersects_any(candidate: &Segment, accepted: &[Segment], cfg: GeomCfg) -> bool {
    accepted.iter().any(|s| candidate.crosses(s, cfg))
}

/// Segments of the candidate assignment under construction.
///
/// Invariant: no two stored segments cross. Segments are only appended after
/// passing `segment_intersects_any` against the current contents.
#[derive(Clone, Debug)]
pub struct AcceptedSet {
    segs: Vec<Segment>,
    cfg: GeomCfg,
}

impl AcceptedSet {
    pub fn new(cfg: GeomCfg) -> Self {
        Self {
            segs: Vec::new(),
            cfg,
        }
    }

    pub fn with_capacity(cfg: GeomCfg, capacity: usize) -> Self {
        Self {
            segs: Vec::with_capacity(capacity),
            cfg,
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.segs.clear();
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segs
    }

    /// Check then append. Returns `false` (and leaves the set unchanged) on a crossing.
    #[inline]
    pub fn try_accept(&mut self, seg: Segment) -> bool {
        if segment_intersects_any(&seg, &self.segs, self.cfg) {
            return false;
        }
        self.segs.push(seg);
        true
    }

    /// Accept every segment of `path` in order; stops at the first crossing.
    #[inline]
    pub fn try_accept_path(&mut self, path: &RoutePath) -> bool {
        path.segments().iter().all(|&seg| self.try_accept(seg))
    }
}

/// Rebuild `accepted` from scratch for `perm` and report whether every route fits.
///
/// Returns at the first crossing; the remaining routes are not built.
pub fn assignment_fits(problem: &Problem, perm: &[usize], accepted: &mut AcceptedSet) -> bool {
    accepted.clear();
    routes(problem, perm).all(|route| accepted.try_accept_path(&build_path(problem, route)))
}

/// Number of segments a full assignment produces.
#[inline]
pub fn segment_count(problem: &Problem) -> usize {
    2 * problem.n_above() + problem.n_below()
}
