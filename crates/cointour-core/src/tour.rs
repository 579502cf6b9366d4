use serde::{Deserialize, Serialize};

use crate::matrix::CostMatrix;

/// A closed visiting order: starts and ends at the origin, every other
/// node exactly once in between.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    stops: Vec<usize>,
}

impl Tour {
    /// Wrap a stop sequence produced by a strategy.
    pub fn from_stops(stops: Vec<usize>) -> Self {
        Tour { stops }
    }

    /// The `[0, 0]` tour of the single-node instance.
    pub fn degenerate() -> Self {
        Tour { stops: vec![0, 0] }
    }

    /// The stop sequence, origin first and last.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Total travel cost over consecutive stops.
    pub fn cost(&self, matrix: &CostMatrix) -> f64 {
        self.stops
            .windows(2)
            .map(|leg| matrix.cost(leg[0], leg[1]))
            .sum()
    }

    /// Whether this is a valid closed tour over `n` nodes: length n + 1,
    /// origin at both ends, interior a permutation of `1..n`.
    pub fn is_closed_permutation(&self, n: usize) -> bool {
        if self.stops.len() != n + 1 {
            return false;
        }
        if self.stops.first() != Some(&0) || self.stops.last() != Some(&0) {
            return false;
        }
        let mut seen = vec![false; n];
        for &stop in &self.stops[1..self.stops.len() - 1] {
            if stop == 0 || stop >= n || seen[stop] {
                return false;
            }
            seen[stop] = true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_sums_consecutive_legs() {
        let m = CostMatrix::from_rows(vec![
            vec![0.0, 1.0, 9.0],
            vec![9.0, 0.0, 2.0],
            vec![3.0, 9.0, 0.0],
        ])
        .unwrap();
        let tour = Tour::from_stops(vec![0, 1, 2, 0]);
        assert_eq!(tour.cost(&m), 6.0);
    }

    #[test]
    fn closed_permutation_checks() {
        assert!(Tour::from_stops(vec![0, 2, 1, 0]).is_closed_permutation(3));
        assert!(Tour::degenerate().is_closed_permutation(1));
        // Wrong length, open end, repeated interior stop, origin repeated inside.
        assert!(!Tour::from_stops(vec![0, 1, 0]).is_closed_permutation(3));
        assert!(!Tour::from_stops(vec![0, 2, 1, 2]).is_closed_permutation(3));
        assert!(!Tour::from_stops(vec![0, 1, 1, 0]).is_closed_permutation(3));
        assert!(!Tour::from_stops(vec![0, 1, 0, 0]).is_closed_permutation(3));
    }
}
