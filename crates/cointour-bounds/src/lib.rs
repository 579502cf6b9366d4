use cointour_core::CostMatrix;

/// Cost of a minimum spanning tree over `members`, grown from
/// `members[0]` one cheapest connecting edge at a time.
///
/// An edge between two members costs the cheaper travel direction, so the
/// bound stays a lower bound on asymmetric matrices too: any closed walk
/// that still has to visit every member spans them, and spanning them can
/// never be cheaper than this tree. Callers pass `{origin} ∪ unvisited`
/// with the origin first. Fewer than two members cost nothing. Negative
/// entries void the lower-bound guarantee.
pub fn mst_lower_bound(matrix: &CostMatrix, members: &[usize]) -> f64 {
    let k = members.len();
    if k < 2 {
        return 0.0;
    }

    // Prim with a per-node cheapest-connection table: O(k^2) over the
    // member list.
    let mut in_tree = vec![false; k];
    in_tree[0] = true;
    let mut connect = vec![f64::INFINITY; k];
    for j in 1..k {
        connect[j] = edge(matrix, members[0], members[j]);
    }

    let mut total = 0.0;
    for _ in 1..k {
        let mut pick = 0;
        let mut best = f64::INFINITY;
        for j in 1..k {
            if !in_tree[j] && connect[j] < best {
                best = connect[j];
                pick = j;
            }
        }
        in_tree[pick] = true;
        total += best;
        for j in 1..k {
            if !in_tree[j] {
                let c = edge(matrix, members[pick], members[j]);
                if c < connect[j] {
                    connect[j] = c;
                }
            }
        }
    }
    total
}

#[inline]
fn edge(matrix: &CostMatrix, a: usize, b: usize) -> f64 {
    matrix.cost(a, b).min(matrix.cost(b, a))
}
