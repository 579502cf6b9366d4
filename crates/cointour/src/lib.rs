#![deny(clippy::all)]

//! Caller-facing surface for the coin-tour planners.
//!
//! The rendering/animation layer hands a pairwise cost matrix to
//! [`get_agent_path`] and gets back the visiting order; which algorithm
//! runs is a [`Strategy`] value, so callers swap planners without
//! touching anything else.

use std::fmt;
use std::str::FromStr;

pub use cointour_best_first::{AStar, BranchAndBound, SearchStats};
pub use cointour_brute_force::BruteForce;
pub use cointour_core::{CostMatrix, PathError, PathStrategy, Tour};
pub use cointour_heuristics::{NearestNeighbor, RandomShuffle};

/// The closed set of available planners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Random visiting order, no optimality attempt.
    Random,
    /// Greedy nearest-unvisited construction.
    Greedy,
    /// Exhaustive enumeration, exact.
    BruteForce,
    /// Lowest-cost-first frontier search, exact.
    BranchAndBound,
    /// MST-informed best-first search, exact.
    AStar,
}

impl Strategy {
    /// Every strategy, in sweep and reporting order.
    pub const ALL: [Strategy; 5] = [
        Strategy::Random,
        Strategy::Greedy,
        Strategy::BruteForce,
        Strategy::BranchAndBound,
        Strategy::AStar,
    ];

    /// Kebab-case identifier, matching [`PathStrategy::name`].
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::Greedy => "greedy",
            Strategy::BruteForce => "brute-force",
            Strategy::BranchAndBound => "branch-and-bound",
            Strategy::AStar => "a-star",
        }
    }

    /// Instantiate the planner behind the common trait.
    pub fn build(self) -> Box<dyn PathStrategy> {
        match self {
            Strategy::Random => Box::new(RandomShuffle::new()),
            Strategy::Greedy => Box::new(NearestNeighbor),
            Strategy::BruteForce => Box::new(BruteForce),
            Strategy::BranchAndBound => Box::new(BranchAndBound),
            Strategy::AStar => Box::new(AStar),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| PathError::InvalidInput(format!("unknown strategy {s:?}")))
    }
}

/// Validate a raw nested cost matrix and plan a tour with the chosen
/// strategy.
///
/// The returned tour has `n + 1` stops, begins and ends at the origin,
/// and visits every other index exactly once. A ragged or empty matrix
/// fails with [`PathError::InvalidInput`] before any search runs.
pub fn get_agent_path(strategy: Strategy, rows: Vec<Vec<f64>>) -> Result<Tour, PathError> {
    let matrix = CostMatrix::from_rows(rows)?;
    let mut planner = strategy.build();
    Ok(planner.plan(&matrix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_rows() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 1.0, 10.0, 10.0],
            vec![10.0, 0.0, 1.0, 10.0],
            vec![10.0, 10.0, 0.0, 1.0],
            vec![1.0, 10.0, 10.0, 0.0],
        ]
    }

    #[test]
    fn every_strategy_parses_its_own_name() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>().unwrap(), strategy);
        }
        assert!("simulated-annealing".parse::<Strategy>().is_err());
    }

    #[test]
    fn every_strategy_plans_a_valid_tour() {
        for strategy in Strategy::ALL {
            let tour = get_agent_path(strategy, ring_rows()).unwrap();
            assert!(tour.is_closed_permutation(4), "{strategy} broke validity");
        }
    }

    #[test]
    fn exact_strategies_return_the_ring() {
        for strategy in [Strategy::BruteForce, Strategy::BranchAndBound, Strategy::AStar] {
            let tour = get_agent_path(strategy, ring_rows()).unwrap();
            assert_eq!(tour.stops(), &[0, 1, 2, 3, 0], "{strategy} missed the ring");
        }
    }

    #[test]
    fn malformed_matrices_fail_before_planning() {
        let ragged = vec![vec![0.0, 1.0], vec![1.0]];
        assert!(get_agent_path(Strategy::Greedy, ragged).is_err());
        assert!(get_agent_path(Strategy::AStar, Vec::new()).is_err());
    }
}
