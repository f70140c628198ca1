use super::*;
use crate::geom::{GeomCfg, Point};
use crate::permutation::{factorial, is_permutation};
use crate::problem::Problem;
use crate::report::Outcome;
use crate::scenario::{random_problem, ScenarioCfg};
use crate::verify::verify_assignment;
use nalgebra::vector;
use proptest::prelude::*;

fn problem(
    sources: Vec<Point>,
    above: Vec<usize>,
    below: Vec<usize>,
    vias: Vec<Point>,
    target: Point,
) -> Problem {
    Problem::new(sources, above, below, vias, target).unwrap()
}

/// Above sources near the origin, vias far right; a below route from (10, 0)
/// to the target (0, 10) crosses every first above segment, so no ordering works.
fn blocked(k: usize) -> Problem {
    let mut sources: Vec<Point> = (0..k).map(|i| vector![0.1 * i as f64, 0.0]).collect();
    sources.push(vector![10.0, 0.0]);
    let vias = (0..k).map(|i| vector![10.0, 5.0 + 0.1 * i as f64]).collect();
    problem(sources, (0..k).collect(), vec![k], vias, vector![0.0, 10.0])
}

fn swapped() -> Problem {
    problem(
        vec![vector![0.0, 0.0], vector![2.0, 0.0]],
        vec![0, 1],
        vec![],
        vec![vector![2.0, 5.0], vector![0.0, 5.0]],
        vector![1.0, 10.0],
    )
}

#[test]
fn identity_accepted_on_first_attempt() {
    let p = problem(
        vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]],
        vec![0, 1, 2],
        vec![],
        vec![vector![0.0, 5.0], vector![1.0, 5.0], vector![2.0, 5.0]],
        vector![1.0, 10.0],
    );
    let s = search_with_defaults(&p, 0);
    assert_eq!(s.outcome(), Outcome::Found);
    assert_eq!(s.attempts(), 1);
    assert_eq!(s.permutation(), Some(&[0, 1, 2][..]));
}

#[test]
fn swapped_vias_found_on_second_attempt() {
    let s = search_with_defaults(&swapped(), 0);
    assert!(s.is_found());
    assert_eq!(s.attempts(), 2);
    assert_eq!(s.permutation(), Some(&[1, 0][..]));
}

#[test]
fn cap_fires_on_attempt_after_limit() {
    let s = search_with_defaults(&swapped(), 1);
    assert_eq!(s.outcome(), Outcome::Capped);
    assert_eq!(s.attempts(), 2);
    assert_eq!(s.permutation(), None);
}

#[test]
fn cap_equal_to_needed_attempts_still_finds() {
    let s = search_with_defaults(&swapped(), 2);
    assert!(s.is_found());
    assert_eq!(s.attempts(), 2);
}

#[test]
fn negative_cap_means_unlimited() {
    let s = search_with_defaults(&blocked(3), -5);
    assert_eq!(s.outcome(), Outcome::Exhausted);
    assert_eq!(s.attempts(), 6);
}

#[test]
fn no_above_points_is_one_trivial_attempt() {
    let p = problem(
        vec![vector![-1.0, 0.0], vector![1.0, 0.0]],
        vec![],
        vec![0, 1],
        vec![],
        vector![0.0, 5.0],
    );
    let s = search_with_defaults(&p, 0);
    assert!(s.is_found());
    assert_eq!(s.attempts(), 1);
    assert_eq!(s.permutation(), Some(&[][..]));
}

#[test]
fn single_above_point_still_checks_below_routes() {
    let s = search_with_defaults(&blocked(1), 0);
    assert_eq!(s.outcome(), Outcome::Exhausted);
    assert_eq!(s.attempts(), 1);
}

#[test]
fn lexicographically_first_solution_wins() {
    // Each source sits under its own via; the identity fits and is tried first.
    let p = problem(
        vec![vector![0.0, 0.0], vector![5.0, 0.0], vector![10.0, 0.0]],
        vec![0, 1, 2],
        vec![],
        vec![vector![0.0, 1.0], vector![5.0, 1.0], vector![10.0, 1.0]],
        vector![5.0, 100.0],
    );
    assert_eq!(search_with_defaults(&p, 0).permutation(), Some(&[0, 1, 2][..]));
    // Reverse the via pool; only the ordering that puts each source under its own via fits.
    let q = problem(
        p.sources().to_vec(),
        vec![0, 1, 2],
        vec![],
        p.vias().iter().rev().copied().collect(),
        vector![5.0, 100.0],
    );
    let s = search_with_defaults(&q, 0);
    assert_eq!(s.permutation(), Some(&[2, 1, 0][..]));
    assert_eq!(s.attempts(), 6);
}

#[test]
fn parallel_matches_sequential_on_fixed_cases() {
    let scfg = SearchCfg {
        chunk_len: 1,
        ..SearchCfg::default()
    };
    for p in [swapped(), blocked(3), blocked(4)] {
        let seq = search_sequential(&p, GeomCfg::default(), scfg);
        let par = search_parallel(&p, GeomCfg::default(), scfg);
        assert_eq!(seq, par);
    }
}

#[test]
fn parallel_honours_cap() {
    let scfg = SearchCfg {
        max_iterations: Some(1),
        parallel: true,
        chunk_len: 2,
    };
    let s = search(&swapped(), GeomCfg::default(), scfg);
    assert_eq!(s.outcome(), Outcome::Capped);
    assert_eq!(s.attempts(), 2);

    let scfg = SearchCfg {
        max_iterations: Some(100),
        ..scfg
    };
    let s = search(&blocked(3), GeomCfg::default(), scfg);
    assert_eq!(s.outcome(), Outcome::Exhausted);
    assert_eq!(s.attempts(), 6);
}

#[test]
fn boundary_cap_conversion() {
    assert_eq!(SearchCfg::with_max_iterations(0).max_iterations, None);
    assert_eq!(SearchCfg::with_max_iterations(-1).max_iterations, None);
    assert_eq!(SearchCfg::with_max_iterations(7).max_iterations, Some(7));
    assert!(SearchCfg::default().parallel(true).parallel);
}

#[test]
fn random_scenarios_reverify_and_agree() {
    let cfg = ScenarioCfg::default();
    let scfg = SearchCfg {
        chunk_len: 5,
        ..SearchCfg::default()
    };
    for seed in 0..40 {
        let p = random_problem(&cfg, seed).unwrap();
        let seq = search_sequential(&p, GeomCfg::default(), scfg);
        let total = factorial(p.n_above()).unwrap();
        assert!(seq.attempts() >= 1 && seq.attempts() <= total);
        match seq.permutation() {
            Some(perm) => {
                assert!(is_permutation(perm));
                assert_eq!(verify_assignment(&p, perm, GeomCfg::default()), None);
            }
            None => assert_eq!(seq.attempts(), total),
        }
        assert_eq!(seq, search_parallel(&p, GeomCfg::default(), scfg), "seed {seed}");
    }
}

proptest! {
    #[test]
    fn exhaustion_visits_n_factorial(k in 1usize..6) {
        let s = search_with_defaults(&blocked(k), 0);
        prop_assert_eq!(s.outcome(), Outcome::Exhausted);
        prop_assert_eq!(Some(s.attempts()), factorial(k));
    }

    #[test]
    fn capped_attempts_are_cap_plus_one(k in 2usize..6, cap in 1u64..10) {
        let s = search_with_defaults(&blocked(k), cap as i64);
        let total = factorial(k).unwrap();
        if cap < total {
            prop_assert_eq!(s.outcome(), Outcome::Capped);
            prop_assert_eq!(s.attempts(), cap + 1);
        } else {
            prop_assert_eq!(s.outcome(), Outcome::Exhausted);
            prop_assert_eq!(s.attempts(), total);
        }
    }
}
