use cointour_core::{CostMatrix, PathStrategy, Tour};

/// Greedy nearest-unvisited construction.
///
/// From the origin, repeatedly commits to the cheapest edge into a
/// still-unvisited node, lowest index winning ties, until every node is
/// taken, then closes back to the origin. There is no backtracking, so an
/// adversarial matrix can make the final legs arbitrarily expensive.
pub struct NearestNeighbor;

impl PathStrategy for NearestNeighbor {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn plan(&mut self, matrix: &CostMatrix) -> Tour {
        let n = matrix.node_count();
        let mut visited = vec![false; n];
        visited[0] = true;

        let mut stops = Vec::with_capacity(n + 1);
        stops.push(0);
        let mut current = 0;

        for _ in 1..n {
            let mut next = 0;
            let mut best = f64::INFINITY;
            for candidate in 1..n {
                if visited[candidate] {
                    continue;
                }
                let cost = matrix.cost(current, candidate);
                if cost < best {
                    best = cost;
                    next = candidate;
                }
            }
            visited[next] = true;
            stops.push(next);
            current = next;
        }

        stops.push(0);
        Tour::from_stops(stops)
    }
}
