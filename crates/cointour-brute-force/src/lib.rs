use cointour_core::{CostMatrix, PathStrategy, Tour};

/// Exact strategy enumerating every `(n - 1)!` visiting order.
///
/// Enumeration is depth-first in ascending index order, which is
/// lexicographic over the interior permutations; strict `<` comparison
/// keeps the first minimum encountered, so the result is deterministic.
/// There is deliberately no pruning here — cheap-branch-first pruning is
/// what distinguishes branch-and-bound from this baseline.
pub struct BruteForce;

impl BruteForce {
    /// Find the cheapest closed tour by full enumeration.
    pub fn solve(&self, matrix: &CostMatrix) -> Tour {
        let n = matrix.node_count();
        if n == 1 {
            return Tour::degenerate();
        }

        let mut visited = vec![false; n];
        visited[0] = true;
        let mut path = Vec::with_capacity(n);
        path.push(0);

        let mut best_cost = f64::INFINITY;
        let mut best = Vec::new();
        enumerate(matrix, 0, &mut path, &mut visited, 0.0, &mut best_cost, &mut best);

        best.push(0);
        Tour::from_stops(best)
    }
}

fn enumerate(
    matrix: &CostMatrix,
    last: usize,
    path: &mut Vec<usize>,
    visited: &mut [bool],
    acc: f64,
    best_cost: &mut f64,
    best: &mut Vec<usize>,
) {
    let n = matrix.node_count();
    if path.len() == n {
        let total = acc + matrix.cost(last, 0);
        if total < *best_cost {
            *best_cost = total;
            best.clear();
            best.extend_from_slice(path);
        }
        return;
    }
    for next in 1..n {
        if visited[next] {
            continue;
        }
        visited[next] = true;
        path.push(next);
        enumerate(
            matrix,
            next,
            path,
            visited,
            acc + matrix.cost(last, next),
            best_cost,
            best,
        );
        path.pop();
        visited[next] = false;
    }
}

impl PathStrategy for BruteForce {
    fn name(&self) -> &'static str {
        "brute-force"
    }

    fn plan(&mut self, matrix: &CostMatrix) -> Tour {
        self.solve(matrix)
    }
}
