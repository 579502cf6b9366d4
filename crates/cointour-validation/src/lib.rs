//! Cross-strategy validation: instance generation, per-instance records
//! and the invariant checks behind the sweep binary.

use cointour::{
    AStar, BranchAndBound, BruteForce, CostMatrix, NearestNeighbor, PathStrategy, RandomShuffle,
};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;

const EPS: f64 = 1e-9;

/// Uniform random instance: off-diagonal costs in `[1, 100)`, zero
/// diagonal, asymmetric unless `symmetric` is set.
pub fn random_matrix(n: usize, symmetric: bool, rng: &mut Xoshiro256PlusPlus) -> CostMatrix {
    let mut rows = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            if symmetric && j < i {
                rows[i][j] = rows[j][i];
            } else {
                rows[i][j] = rng.gen_range(1.0..100.0);
            }
        }
    }
    CostMatrix::from_rows(rows).expect("generated rows are square")
}

/// The 4-node reference instance: a directed unit-cost ring among
/// prohibitive edges. Optimal tour `[0, 1, 2, 3, 0]` at cost 4.
pub fn ring_matrix() -> CostMatrix {
    CostMatrix::from_rows(vec![
        vec![0.0, 1.0, 10.0, 10.0],
        vec![10.0, 0.0, 1.0, 10.0],
        vec![10.0, 10.0, 0.0, 1.0],
        vec![1.0, 10.0, 10.0, 0.0],
    ])
    .expect("reference rows are square")
}

/// One instance's cross-strategy outcome.
#[derive(Clone, Debug, Serialize)]
pub struct SweepRecord {
    pub n: usize,
    pub seed: u64,
    pub optimal_cost: f64,
    pub greedy_cost: f64,
    pub random_cost: f64,
    pub bnb_expanded: usize,
    pub astar_expanded: usize,
}

impl SweepRecord {
    pub const CSV_HEADER: &'static str =
        "n,seed,optimal_cost,greedy_cost,random_cost,bnb_expanded,astar_expanded";

    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{}",
            self.n,
            self.seed,
            self.optimal_cost,
            self.greedy_cost,
            self.random_cost,
            self.bnb_expanded,
            self.astar_expanded
        )
    }
}

/// Run every strategy on one seeded instance, check the cross-strategy
/// invariants, and report the outcome.
///
/// Panics when an invariant breaks: that is the point of the harness.
pub fn run_instance(n: usize, seed: u64) -> SweepRecord {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let matrix = random_matrix(n, false, &mut rng);

    let optimal = BruteForce.solve(&matrix);
    let (bnb_tour, bnb_stats) = BranchAndBound.solve_with_stats(&matrix);
    let (astar_tour, astar_stats) = AStar.solve_with_stats(&matrix);
    let greedy = NearestNeighbor.plan(&matrix);
    let random = RandomShuffle::with_seed(seed).plan(&matrix);

    let optimal_cost = optimal.cost(&matrix);
    for (name, tour) in [
        ("brute-force", &optimal),
        ("branch-and-bound", &bnb_tour),
        ("a-star", &astar_tour),
        ("greedy", &greedy),
        ("random", &random),
    ] {
        assert!(
            tour.is_closed_permutation(n),
            "{name} returned an invalid tour on n={n} seed={seed}"
        );
    }
    assert!(
        (bnb_tour.cost(&matrix) - optimal_cost).abs() < EPS,
        "branch-and-bound disagreed with brute force on n={n} seed={seed}"
    );
    assert!(
        (astar_tour.cost(&matrix) - optimal_cost).abs() < EPS,
        "a-star disagreed with brute force on n={n} seed={seed}"
    );
    assert!(
        greedy.cost(&matrix) >= optimal_cost - EPS,
        "greedy beat the optimum on n={n} seed={seed}"
    );
    assert!(
        random.cost(&matrix) >= optimal_cost - EPS,
        "random beat the optimum on n={n} seed={seed}"
    );
    assert!(
        astar_stats.expanded <= bnb_stats.expanded,
        "a-star expanded more nodes than branch-and-bound on n={n} seed={seed}"
    );

    SweepRecord {
        n,
        seed,
        optimal_cost,
        greedy_cost: greedy.cost(&matrix),
        random_cost: random.cost(&matrix),
        bnb_expanded: bnb_stats.expanded,
        astar_expanded: astar_stats.expanded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cointour::{get_agent_path, Strategy};

    #[test]
    fn instances_pass_their_own_invariants() {
        for n in 2..=7 {
            for seed in 0..3 {
                run_instance(n, 1000 * n as u64 + seed);
            }
        }
    }

    #[test]
    fn reference_ring_is_solved_by_every_exact_strategy() {
        let rows = ring_matrix().rows();
        for strategy in [Strategy::BruteForce, Strategy::BranchAndBound, Strategy::AStar] {
            let tour = get_agent_path(strategy, rows.clone()).unwrap();
            assert_eq!(tour.stops(), &[0, 1, 2, 3, 0]);
            assert_eq!(tour.cost(&ring_matrix()), 4.0);
        }
    }

    #[test]
    fn record_serializes_for_the_sweep_output() {
        let record = run_instance(5, 7);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"optimal_cost\""));
        assert_eq!(record.to_csv_row().split(',').count(), 7);
    }

    #[test]
    fn symmetric_instances_are_symmetric() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        let m = random_matrix(6, true, &mut rng);
        for i in 0..6 {
            for j in 0..6 {
                assert_eq!(m.cost(i, j), m.cost(j, i));
            }
        }
    }
}
