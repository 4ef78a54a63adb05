//! Initial row and column reduction.
//!
//! Subtracting each row's minimum and then each column's minimum of what
//! remains is the classic first step of the Hungarian method. Expressed as
//! dual potentials it leaves the cost matrix untouched: `u[i]` is the row
//! minimum, `v[j]` the column minimum of the row-reduced matrix, and the
//! reduced cost `cost - u - v` is non-negative with at least one zero in
//! every row and every column.

use munkres_core::{CostMatrix, Potentials};

/// Outcome of the initial reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    pub potentials: Potentials,

    /// `u`, before any augmentation touches it.
    pub row_minima: Vec<f64>,

    /// `v`, before any augmentation touches it.
    pub col_minima: Vec<f64>,
}

/// Computes the initial dual potentials over the padded square.
///
/// Runs in `O(size²)` and cannot fail.
///
/// # Examples
///
/// ```
/// use munkres_core::{CostMatrix, Objective};
/// use munkres_solver::initial_reduction;
///
/// let matrix = CostMatrix::normalize(&[[4.0, 1.0], [2.0, 0.0]], Objective::Minimize, 8).unwrap();
/// let reduction = initial_reduction(&matrix);
///
/// assert_eq!(reduction.row_minima, vec![1.0, 0.0]);
/// assert_eq!(reduction.col_minima, vec![2.0, 0.0]);
/// ```
pub fn initial_reduction(matrix: &CostMatrix) -> Reduction {
    let size = matrix.size();

    let row_minima: Vec<f64> = (0..size)
        .map(|i| {
            matrix
                .cost_row(i)
                .iter()
                .copied()
                .fold(f64::INFINITY, f64::min)
        })
        .collect();

    let mut col_minima = vec![f64::INFINITY; size];
    for (i, u) in row_minima.iter().enumerate() {
        for (j, cost) in matrix.cost_row(i).iter().enumerate() {
            col_minima[j] = col_minima[j].min(cost - u);
        }
    }

    Reduction {
        potentials: Potentials::from_parts(row_minima.clone(), col_minima.clone()),
        row_minima,
        col_minima,
    }
}

#[cfg(test)]
mod tests {
    use munkres_core::Objective;

    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn normalize(raw: &[Vec<f64>]) -> CostMatrix {
        CostMatrix::normalize(raw, Objective::Minimize, 16).unwrap()
    }

    #[test]
    fn test_worked_example() {
        let matrix = normalize(&[
            vec![1.0, 2.0, 3.0],
            vec![2.0, 4.0, 6.0],
            vec![3.0, 6.0, 9.0],
        ]);
        let reduction = initial_reduction(&matrix);

        // Internal costs are shifted by min(raw) = 1.
        assert_eq!(reduction.row_minima, vec![0.0, 1.0, 2.0]);
        assert_eq!(reduction.col_minima, vec![0.0, 1.0, 2.0]);
        assert_eq!(
            reduction.potentials.reduced_snapshot(&matrix),
            vec![
                vec![0.0, 0.0, 0.0],
                vec![0.0, 1.0, 2.0],
                vec![0.0, 2.0, 4.0]
            ]
        );
    }

    #[test]
    fn test_zero_in_every_row_and_column() {
        let matrix = normalize(&[
            vec![7.0, 3.0, 9.0, 4.0],
            vec![2.0, 8.0, 6.0, 5.0],
            vec![4.0, 4.0, 1.0, 9.0],
            vec![6.0, 2.0, 3.0, 8.0],
        ]);
        let reduction = initial_reduction(&matrix);
        let p = &reduction.potentials;

        for i in 0..4 {
            assert!((0..4).any(|j| p.is_tight(&matrix, i, j, TOLERANCE)));
        }
        for j in 0..4 {
            assert!((0..4).any(|i| p.is_tight(&matrix, i, j, TOLERANCE)));
        }
        for i in 0..4 {
            for j in 0..4 {
                assert!(p.reduced_cost(&matrix, i, j) >= -TOLERANCE);
            }
        }
    }

    #[test]
    fn test_padded_rows_reduce_to_zero() {
        let matrix = normalize(&[vec![5.0, 1.0, 3.0]]);
        let reduction = initial_reduction(&matrix);
        let pad = matrix.padding_value();

        assert_eq!(reduction.row_minima, vec![0.0, pad, pad]);
        for j in 0..3 {
            assert_eq!(reduction.potentials.reduced_cost(&matrix, 1, j), 0.0);
        }
    }

    #[test]
    fn test_padded_columns_keep_positive_slack() {
        let matrix = normalize(&[vec![5.0], vec![1.0]]);
        let reduction = initial_reduction(&matrix);

        // Real column minimum is zero after the row pass; the padded column is
        // still more expensive than any real cell.
        assert_eq!(reduction.col_minima[0], 0.0);
        assert!(reduction.col_minima[1] > 0.0);
    }
}
