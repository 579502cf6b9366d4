mod node;

pub use node::SearchNode;

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use cointour_bounds::mst_lower_bound;
use cointour_core::{CostMatrix, PathStrategy, Tour};

/// Statistics for one search invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Frontier nodes popped, the accepted tour included.
    pub expanded: usize,
}

/// Exact branch-and-bound: lowest accumulated cost first, no heuristic.
///
/// The first closed tour popped from the frontier is optimal, because
/// every cheaper continuation would still be sitting in the frontier
/// with a lower accumulated cost. Worst case is close to brute force;
/// in practice expensive branches never get expanded.
pub struct BranchAndBound;

impl BranchAndBound {
    /// Solve and report how many nodes the search expanded.
    pub fn solve_with_stats(&self, matrix: &CostMatrix) -> (Tour, SearchStats) {
        best_first(matrix, |_, _| 0.0)
    }
}

impl PathStrategy for BranchAndBound {
    fn name(&self) -> &'static str {
        "branch-and-bound"
    }

    fn plan(&mut self, matrix: &CostMatrix) -> Tour {
        self.solve_with_stats(matrix).0
    }
}

/// Informed best-first search: accumulated cost plus an MST lower bound
/// over the origin and the unvisited nodes.
///
/// The bound is admissible, so acceptance stays exact while the frontier
/// explores far fewer nodes than plain branch-and-bound. Each expansion
/// pays one Prim construction over the unvisited set for that extra
/// pruning.
pub struct AStar;

impl AStar {
    /// Solve and report how many nodes the search expanded.
    pub fn solve_with_stats(&self, matrix: &CostMatrix) -> (Tour, SearchStats) {
        best_first(matrix, mst_lower_bound)
    }
}

impl PathStrategy for AStar {
    fn name(&self) -> &'static str {
        "a-star"
    }

    fn plan(&mut self, matrix: &CostMatrix) -> Tour {
        self.solve_with_stats(matrix).0
    }
}

/// Shared frontier loop behind both exact best-first strategies.
///
/// `bound` receives the member set `{origin} ∪ unvisited` (origin first)
/// and returns a lower bound on the cost of finishing the tour through
/// those nodes; it is evaluated once per expansion and stamped on every
/// successor of that expansion.
fn best_first<F>(matrix: &CostMatrix, bound: F) -> (Tour, SearchStats)
where
    F: Fn(&CostMatrix, &[usize]) -> f64,
{
    let n = matrix.node_count();
    if n == 1 {
        return (Tour::degenerate(), SearchStats::default());
    }

    let mut frontier = BinaryHeap::new();
    let everyone: Vec<usize> = (0..n).collect();
    frontier.push(Reverse(SearchNode::new(
        0.0,
        bound(matrix, &everyone),
        vec![0],
    )));

    let mut stats = SearchStats::default();
    while let Some(Reverse(node)) = frontier.pop() {
        stats.expanded += 1;
        log::trace!(
            "expand #{}: path {:?}, g {}, h {}",
            stats.expanded,
            node.path(),
            node.cost(),
            node.heuristic()
        );

        let path = node.path();
        let last = path[path.len() - 1];

        if path.len() > 1 && last == 0 {
            log::debug!(
                "accepted tour at cost {} after {} expansions",
                node.cost(),
                stats.expanded
            );
            return (Tour::from_stops(node.into_path()), stats);
        }

        if path.len() == n {
            // Every node is covered; the only successor closes the tour.
            let mut closed = path.to_vec();
            closed.push(0);
            frontier.push(Reverse(SearchNode::new(
                node.cost() + matrix.cost(last, 0),
                0.0,
                closed,
            )));
            continue;
        }

        let mut members = Vec::with_capacity(n - path.len() + 1);
        members.push(0);
        members.extend((1..n).filter(|i| !path.contains(i)));
        let estimate = bound(matrix, &members);

        for &next in &members[1..] {
            let mut extended = path.to_vec();
            extended.push(next);
            frontier.push(Reverse(SearchNode::new(
                node.cost() + matrix.cost(last, next),
                estimate,
                extended,
            )));
        }
    }

    // The frontier starts non-empty and every popped node that is not a
    // closed tour pushes at least one successor, so running dry means a
    // broken invariant, not a recoverable condition.
    unreachable!("search frontier exhausted before any closed tour")
}
