use std::cmp::Ordering;

/// Frontier entry: a partial path with its accumulated cost and
/// heuristic estimate.
///
/// Immutable once created; the frontier owns each node until it is
/// popped. The `Ord` impl is the search priority: total estimate
/// ascending, then path length descending (deeper paths first on ties),
/// then last stop ascending as a final deterministic key.
/// `f64::total_cmp` keeps the order total, which `BinaryHeap` needs to
/// keep its invariant intact, and `PartialEq`/`Eq` are defined through
/// `cmp` so every comparison operator agrees.
#[derive(Clone, Debug)]
pub struct SearchNode {
    cost: f64,
    heuristic: f64,
    total: f64,
    path: Vec<usize>,
}

impl SearchNode {
    pub(crate) fn new(cost: f64, heuristic: f64, path: Vec<usize>) -> Self {
        SearchNode {
            cost,
            heuristic,
            total: cost + heuristic,
            path,
        }
    }

    /// Accumulated cost of the partial path.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Lower-bound estimate of the remaining cost.
    pub fn heuristic(&self) -> f64 {
        self.heuristic
    }

    /// Search priority: accumulated cost plus estimate.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// The partial path, origin first, not yet closed unless accepted.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    pub(crate) fn into_path(self) -> Vec<usize> {
        self.path
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total
            .total_cmp(&other.total)
            .then_with(|| other.path.len().cmp(&self.path.len()))
            .then_with(|| self.path.last().cmp(&other.path.last()))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    #[test]
    fn lower_total_comes_first() {
        let cheap = SearchNode::new(1.0, 2.0, vec![0, 1]);
        let dear = SearchNode::new(2.0, 3.0, vec![0, 1]);
        assert!(cheap < dear);
    }

    #[test]
    fn longer_path_wins_a_total_tie() {
        let deep = SearchNode::new(3.0, 0.0, vec![0, 1, 2]);
        let shallow = SearchNode::new(3.0, 0.0, vec![0, 2]);
        assert!(deep < shallow);
    }

    #[test]
    fn smaller_last_stop_breaks_remaining_ties() {
        let a = SearchNode::new(3.0, 0.0, vec![0, 2, 1]);
        let b = SearchNode::new(3.0, 0.0, vec![0, 1, 3]);
        assert!(a < b);
        // Same total, length and last stop: equal for ordering purposes
        // even though the paths differ.
        let c = SearchNode::new(1.0, 2.0, vec![0, 2, 1]);
        assert!(a == c);
    }

    #[test]
    fn reversed_heap_pops_in_priority_order() {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(SearchNode::new(5.0, 0.0, vec![0, 3])));
        heap.push(Reverse(SearchNode::new(2.0, 1.0, vec![0, 1])));
        heap.push(Reverse(SearchNode::new(3.0, 0.0, vec![0, 1, 2])));
        heap.push(Reverse(SearchNode::new(3.0, 0.0, vec![0, 2])));

        let order: Vec<Vec<usize>> = std::iter::from_fn(|| heap.pop())
            .map(|Reverse(node)| node.into_path())
            .collect();
        // Totals 3, 3, 3 and 5: the deepest tied path first, then the
        // smaller last stop, then the expensive stray.
        assert_eq!(
            order,
            vec![vec![0, 1, 2], vec![0, 1], vec![0, 2], vec![0, 3]]
        );
    }
}
