use serde::{Deserialize, Serialize};

use crate::error::PathError;

/// Pairwise travel costs between all coins, with the origin at index 0.
///
/// Stored flattened row-major; `cost(from, to)` reads `data[from * n + to]`.
/// Entries are not required to be symmetric and the diagonal is never read
/// by any strategy. Negative entries are accepted but void the optimality
/// and admissibility guarantees of the exact strategies.
///
/// The serde representation is the nested-row form, so JSON fixtures stay
/// readable; deserialization goes through [`CostMatrix::from_rows`] and
/// cannot bypass validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct CostMatrix {
    n: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    /// Build a matrix from nested rows, validating shape.
    ///
    /// Fails with [`PathError::InvalidInput`] when there are no rows or
    /// any row length differs from the row count.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, PathError> {
        let n = rows.len();
        if n == 0 {
            return Err(PathError::InvalidInput("cost matrix has no rows".into()));
        }
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(PathError::InvalidInput(format!(
                    "cost matrix is not square: row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(CostMatrix { n, data })
    }

    /// Number of nodes, including the origin. Always at least 1.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Travel cost from node `from` to node `to`.
    #[inline]
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.n + to]
    }

    /// Nested-row view of the matrix, the serde representation.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.n).map(|row| row.to_vec()).collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for CostMatrix {
    type Error = PathError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        CostMatrix::from_rows(rows)
    }
}

impl From<CostMatrix> for Vec<Vec<f64>> {
    fn from(matrix: CostMatrix) -> Self {
        matrix.rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_accepts_square_input() {
        let m = CostMatrix::from_rows(vec![vec![0.0, 2.0], vec![3.0, 0.0]]).unwrap();
        assert_eq!(m.node_count(), 2);
        assert_eq!(m.cost(0, 1), 2.0);
        assert_eq!(m.cost(1, 0), 3.0);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = CostMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, PathError::InvalidInput(_)));
    }

    #[test]
    fn from_rows_rejects_empty_input() {
        let err = CostMatrix::from_rows(Vec::new()).unwrap_err();
        assert!(matches!(err, PathError::InvalidInput(_)));
    }

    #[test]
    fn single_node_matrix_is_valid() {
        let m = CostMatrix::from_rows(vec![vec![0.0]]).unwrap();
        assert_eq!(m.node_count(), 1);
    }

    #[test]
    fn deserialization_revalidates_shape() {
        let m: CostMatrix = serde_json::from_str("[[0.0, 5.0], [7.0, 0.0]]").unwrap();
        assert_eq!(m.cost(1, 0), 7.0);
        // Ragged JSON must fail the same way from_rows does.
        assert!(serde_json::from_str::<CostMatrix>("[[0.0, 5.0], [7.0]]").is_err());
    }
}
