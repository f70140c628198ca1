//! Result document written by `solve`.

use serde::Serialize;

use planar::api::{connections, factorial, Outcome, Problem, Solution};

#[derive(Debug, Serialize)]
pub struct SolveReport {
    pub outcome: Outcome,
    pub found: bool,
    pub attempts: u64,
    pub n_above: usize,
    pub n_below: usize,
    /// `n_above!`, absent when it overflows `u64`.
    pub search_space: Option<u64>,
    pub permutation: Option<Vec<usize>>,
    /// One polyline per source, indexed like the input.
    pub connections: Option<Vec<Vec<[f64; 2]>>>,
}

impl SolveReport {
    pub fn new(problem: &Problem, solution: &Solution) -> Self {
        let lines = solution.permutation().map(|perm| {
            connections(problem, perm)
                .into_iter()
                .map(|line| line.into_iter().map(|p| [p.x, p.y]).collect())
                .collect()
        });
        Self {
            outcome: solution.outcome(),
            found: solution.is_found(),
            attempts: solution.attempts(),
            n_above: problem.n_above(),
            n_below: problem.n_below(),
            search_space: factorial(problem.n_above()),
            permutation: solution.permutation().map(<[usize]>::to_vec),
            connections: lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar::api::search_with_defaults;

    #[test]
    fn report_of_found_solution() {
        let p = Problem::from_arrays(
            &[0.0, 2.0],
            &[0.0, 0.0],
            &[0, 1],
            &[],
            &[2.0, 0.0],
            &[5.0, 5.0],
            (1.0, 10.0),
        )
        .unwrap();
        let r = SolveReport::new(&p, &search_with_defaults(&p, 0));
        assert!(r.found);
        assert_eq!(r.attempts, 2);
        assert_eq!(r.search_space, Some(2));
        assert_eq!(r.permutation, Some(vec![1, 0]));
        let lines = r.connections.unwrap();
        assert_eq!(lines[0], vec![[0.0, 0.0], [0.0, 5.0], [1.0, 10.0]]);
        let capped = SolveReport::new(&p, &search_with_defaults(&p, 1));
        let json = serde_json::to_value(&capped).unwrap();
        assert_eq!(json["outcome"], "capped");
        assert_eq!(json["permutation"], serde_json::Value::Null);
    }
}
