//! Maps a perfect matching on the padded square back to the caller's matrix.

use munkres_core::{AssignedPair, Assignment, CostMatrix, Matching};

/// Drops padded pairs and reads values from the raw input.
///
/// The objective is summed from the original values, never from the
/// transformed costs, so a maximized profit comes back as a profit.
///
/// # Panics
///
/// Panics if `matching` is not perfect over `matrix.size()`, or if the real
/// pairs do not number `min(rows, cols)`.
pub fn assemble(matching: &Matching, matrix: &CostMatrix) -> Assignment {
    assert!(matching.is_perfect(), "cannot assemble an incomplete matching");

    let pairs: Vec<AssignedPair> = matching
        .pairs()
        .into_iter()
        .filter(|&(row, col)| !matrix.is_padding(row, col))
        .map(|(row, col)| AssignedPair {
            row,
            col,
            value: matrix.raw(row, col),
        })
        .collect();

    Assignment::new(pairs, matrix.objective(), matrix.rows(), matrix.cols())
}

#[cfg(test)]
mod tests {
    use munkres_core::Objective;

    use super::*;

    fn perfect(size: usize, pairs: &[(usize, usize)]) -> Matching {
        let mut matching = Matching::new(size, size);
        for &(i, j) in pairs {
            matching.link(i, j);
        }
        matching
    }

    #[test]
    fn test_maximize_reports_profit() {
        let raw = vec![vec![9.0, 2.0], vec![6.0, 4.0]];
        let matrix = CostMatrix::normalize(&raw, Objective::Maximize, 8).unwrap();
        let assignment = assemble(&perfect(2, &[(0, 0), (1, 1)]), &matrix);

        assert_eq!(assignment.total(), 13.0);
        assert_eq!(assignment.objective(), Objective::Maximize);
        assert_eq!(assignment.pairs()[1].value, 4.0);
    }

    #[test]
    fn test_wide_drops_padded_rows() {
        let raw = vec![vec![4.0, 1.0, 3.0]];
        let matrix = CostMatrix::normalize(&raw, Objective::Minimize, 8).unwrap();
        let assignment = assemble(&perfect(3, &[(0, 1), (1, 0), (2, 2)]), &matrix);

        assert_eq!(assignment.indices(), vec![(0, 1)]);
        assert_eq!(assignment.total(), 1.0);
    }

    #[test]
    fn test_tall_drops_padded_columns() {
        let raw = vec![vec![4.0], vec![1.0], vec![3.0]];
        let matrix = CostMatrix::normalize(&raw, Objective::Minimize, 8).unwrap();
        let assignment = assemble(&perfect(3, &[(0, 2), (1, 0), (2, 1)]), &matrix);

        assert_eq!(assignment.indices(), vec![(1, 0)]);
        assert_eq!(assignment.row_for_col(0), Some(1));
    }

    #[test]
    #[should_panic(expected = "incomplete")]
    fn test_incomplete_matching_panics() {
        let raw = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let matrix = CostMatrix::normalize(&raw, Objective::Minimize, 8).unwrap();
        assemble(&perfect(2, &[(0, 0)]), &matrix);
    }
}
