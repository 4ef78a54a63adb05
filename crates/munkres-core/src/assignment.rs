//! Final assignment in the caller's original units.

use crate::error::Result;
use crate::labels::AxisLabels;
use crate::objective::Objective;

/// One chosen cell.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignedPair {
    pub row: usize,
    pub col: usize,
    /// Caller's original value at `(row, col)`.
    pub value: f64,
}

/// An [`AssignedPair`] resolved against axis labels.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledPair<'a> {
    pub worker: &'a str,
    pub task: &'a str,
    pub value: f64,
}

/// Optimal pairing of rows to columns.
///
/// Holds exactly `min(rows, cols)` pairs ordered by row; no row or column
/// index appears twice. `total` is the sum of the original values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pairs: Vec<AssignedPair>,
    objective: Objective,
    total: f64,
    rows: usize,
    cols: usize,
    labels: Option<AxisLabels>,
}

impl Assignment {
    /// Builds an assignment from pairs already sorted by row.
    ///
    /// # Panics
    ///
    /// Panics if the pairs are not strictly increasing by row, repeat a
    /// column, fall outside `rows x cols`, or do not number `min(rows, cols)`.
    pub fn new(pairs: Vec<AssignedPair>, objective: Objective, rows: usize, cols: usize) -> Self {
        assert_eq!(
            pairs.len(),
            rows.min(cols),
            "assignment of a {rows}x{cols} matrix must have {} pairs",
            rows.min(cols)
        );
        let mut used_cols = vec![false; cols];
        for (k, pair) in pairs.iter().enumerate() {
            assert!(pair.row < rows && pair.col < cols, "pair {pair:?} out of bounds");
            assert!(
                k == 0 || pairs[k - 1].row < pair.row,
                "pairs must be strictly ordered by row"
            );
            assert!(!used_cols[pair.col], "column {} assigned twice", pair.col);
            used_cols[pair.col] = true;
        }

        let total = pairs.iter().map(|p| p.value).sum();
        Self {
            pairs,
            objective,
            total,
            rows,
            cols,
            labels: None,
        }
    }

    /// Attaches axis labels after checking their counts.
    pub fn with_labels(mut self, labels: AxisLabels) -> Result<Self> {
        labels.validate(self.rows, self.cols)?;
        self.labels = Some(labels);
        Ok(self)
    }

    pub fn pairs(&self) -> &[AssignedPair] {
        &self.pairs
    }

    /// Sum of the original values over all pairs.
    #[inline]
    pub fn total(&self) -> f64 {
        self.total
    }

    #[inline]
    pub fn objective(&self) -> Objective {
        self.objective
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Shape of the matrix this assignment was solved from.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn labels(&self) -> Option<&AxisLabels> {
        self.labels.as_ref()
    }

    pub fn col_for_row(&self, row: usize) -> Option<usize> {
        self.pairs.iter().find(|p| p.row == row).map(|p| p.col)
    }

    pub fn row_for_col(&self, col: usize) -> Option<usize> {
        self.pairs.iter().find(|p| p.col == col).map(|p| p.row)
    }

    /// `(row, col)` tuples in row order.
    pub fn indices(&self) -> Vec<(usize, usize)> {
        self.pairs.iter().map(|p| (p.row, p.col)).collect()
    }

    /// Pairs resolved against the attached labels.
    ///
    /// Returns `None` when no labels are attached.
    pub fn labeled_pairs(&self) -> Option<Vec<LabeledPair<'_>>> {
        let labels = self.labels.as_ref()?;
        Some(
            self.pairs
                .iter()
                .map(|p| LabeledPair {
                    worker: labels.row(p.row),
                    task: labels.col(p.col),
                    value: p.value,
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssignmentError;
    use crate::labels::Axis;

    fn pair(row: usize, col: usize, value: f64) -> AssignedPair {
        AssignedPair { row, col, value }
    }

    #[test]
    fn test_total_and_lookup() {
        let assignment = Assignment::new(
            vec![pair(0, 2, 3.0), pair(1, 1, 4.0), pair(2, 0, 3.0)],
            Objective::Minimize,
            3,
            3,
        );

        assert_eq!(assignment.total(), 10.0);
        assert_eq!(assignment.len(), 3);
        assert_eq!(assignment.col_for_row(0), Some(2));
        assert_eq!(assignment.row_for_col(0), Some(2));
        assert_eq!(assignment.indices(), vec![(0, 2), (1, 1), (2, 0)]);
        assert!(assignment.labeled_pairs().is_none());
    }

    #[test]
    fn test_tall_assignment_leaves_rows_unassigned() {
        let assignment = Assignment::new(vec![pair(1, 0, 2.0)], Objective::Maximize, 3, 1);
        assert_eq!(assignment.col_for_row(0), None);
        assert_eq!(assignment.shape(), (3, 1));
    }

    #[test]
    fn test_labels() {
        let assignment = Assignment::new(vec![pair(0, 1, 7.0)], Objective::Maximize, 1, 2)
            .with_labels(AxisLabels::new(["Ana"], ["Paint", "Weld"]))
            .unwrap();

        let labeled = assignment.labeled_pairs().unwrap();
        assert_eq!(
            labeled,
            vec![LabeledPair {
                worker: "Ana",
                task: "Weld",
                value: 7.0
            }]
        );
    }

    #[test]
    fn test_label_mismatch() {
        let err = Assignment::new(vec![pair(0, 0, 1.0)], Objective::Minimize, 1, 2)
            .with_labels(AxisLabels::defaults(1, 3))
            .unwrap_err();

        assert_eq!(
            err,
            AssignmentError::LabelMismatch {
                axis: Axis::Columns,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    #[should_panic(expected = "assigned twice")]
    fn test_repeated_column_panics() {
        Assignment::new(vec![pair(0, 0, 1.0), pair(1, 0, 1.0)], Objective::Minimize, 2, 2);
    }

    #[test]
    #[should_panic(expected = "must have")]
    fn test_wrong_pair_count_panics() {
        Assignment::new(vec![pair(0, 0, 1.0)], Objective::Minimize, 2, 2);
    }
}
