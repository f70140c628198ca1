//! Independent re-check of a finished assignment (all pairs, no pruning).

use crate::geom::{GeomCfg, Segment};
use crate::problem::Problem;
use crate::route::{build_path, routes};

/// Every segment of the assignment, in route order.
pub fn expand_segments(problem: &Problem, perm: &[usize]) -> Vec<Segment> {
    routes(problem, perm)
        .flat_map(|route| build_path(problem, route).segments().to_vec())
        .collect()
}

/// First crossing pair `(i, j)` with `i < j` over `expand_segments`, if any.
pub fn verify_assignment(
    problem: &Problem,
    perm: &[usize],
    cfg: GeomCfg,
) -> Option<(usize, usize)> {
    let segs = expand_segments(problem, perm);
    for (i, a) in segs.iter().enumerate() {
        for (j, b) in segs.iter().enumerate().skip(i + 1) {
            if a.crosses(b, cfg) {
                return Some((i, j));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn swapped() -> Problem {
        Problem::new(
            vec![vector![0.0, 0.0], vector![2.0, 0.0]],
            vec![0, 1],
            vec![],
            vec![vector![2.0, 5.0], vector![0.0, 5.0]],
            vector![1.0, 10.0],
        )
        .unwrap()
    }

    #[test]
    fn finds_the_crossing_pair() {
        // segments: 0 = A0→B0, 1 = B0→T, 2 = A1→B1, 3 = B1→T
        assert_eq!(verify_assignment(&swapped(), &[0, 1], GeomCfg::default()), Some((0, 2)));
    }

    #[test]
    fn clean_assignment_has_no_pair() {
        assert_eq!(verify_assignment(&swapped(), &[1, 0], GeomCfg::default()), None);
        assert_eq!(expand_segments(&swapped(), &[1, 0]).len(), 4);
    }
}
