//! Mooring layout end to end: sources → problem → search → re-check → polylines.
//!
//! Run: `cargo run -p planar --example mooring_demo`

use std::time::Instant;

use nalgebra::vector;
use planar::api::*;

fn main() {
    let sources = [
        vector![-40.0, 160.0],
        vector![35.0, 140.0],
        vector![-10.0, 190.0],
        vector![60.0, 120.0],
        vector![-70.0, 40.0],
        vector![20.0, 60.0],
    ];
    let problem = build_problem(&sources, MooringCfg::new(100.0, 150.0))
        .expect("demo layout is well-formed");
    println!(
        "above: {}, below: {}, orderings: {:?}",
        problem.n_above(),
        problem.n_below(),
        factorial(problem.n_above())
    );

    let start = Instant::now();
    let solution = search_with_defaults(&problem, 0);
    let ms = start.elapsed().as_secs_f64() * 1e3;
    println!(
        "outcome: {:?} after {} attempts ({ms:.3} ms)",
        solution.outcome(),
        solution.attempts()
    );

    if let Some(perm) = solution.permutation() {
        assert_eq!(verify_assignment(&problem, perm, GeomCfg::default()), None);
        for (i, line) in connections(&problem, perm).iter().enumerate() {
            let pts: Vec<String> = line
                .iter()
                .map(|p| format!("({:.1}, {:.1})", p.x, p.y))
                .collect();
            println!("  source {i}: {}", pts.join(" -> "));
        }
    }
}
