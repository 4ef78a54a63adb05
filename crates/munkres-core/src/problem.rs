//! Self-contained problem description.

use crate::error::Result;
use crate::labels::AxisLabels;
use crate::matrix::CostMatrix;
use crate::objective::Objective;

/// A matrix, its objective and optional labels, shippable as one value.
///
/// With the `serde` feature this deserializes from e.g. TOML:
///
/// ```toml
/// objective = "maximize"
/// matrix = [[9, 2, 7], [6, 4, 3], [5, 8, 1]]
///
/// [labels]
/// rows = ["Ana", "Budi", "Citra"]
/// cols = ["Paint", "Weld", "Pack"]
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentProblem {
    pub matrix: Vec<Vec<f64>>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub objective: Objective,

    #[cfg_attr(feature = "serde", serde(default))]
    pub labels: Option<AxisLabels>,
}

impl AssignmentProblem {
    pub fn new(matrix: Vec<Vec<f64>>, objective: Objective) -> Self {
        Self {
            matrix,
            objective,
            labels: None,
        }
    }

    /// An all-zero `rows x cols` problem.
    pub fn zeros(rows: usize, cols: usize, objective: Objective) -> Self {
        Self::new(vec![vec![0.0; cols]; rows], objective)
    }

    pub fn with_labels(mut self, labels: AxisLabels) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn rows(&self) -> usize {
        self.matrix.len()
    }

    pub fn cols(&self) -> usize {
        self.matrix.first().map_or(0, Vec::len)
    }

    /// Validates labels and normalizes the matrix.
    pub fn normalize(&self, max_dimension: usize) -> Result<CostMatrix> {
        let matrix = CostMatrix::normalize(&self.matrix, self.objective, max_dimension)?;
        if let Some(labels) = &self.labels {
            labels.validate(matrix.rows(), matrix.cols())?;
        }
        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssignmentError;
    use crate::labels::Axis;

    #[test]
    fn test_zeros() {
        let problem = AssignmentProblem::zeros(3, 3, Objective::Maximize);
        assert_eq!((problem.rows(), problem.cols()), (3, 3));
        assert!(problem.labels.is_none());

        let matrix = problem.normalize(128).unwrap();
        assert_eq!(matrix.size(), 3);
    }

    #[test]
    fn test_label_rows_checked() {
        let problem = AssignmentProblem::zeros(2, 3, Objective::Minimize)
            .with_labels(AxisLabels::defaults(3, 3));

        assert_eq!(
            problem.normalize(128).unwrap_err(),
            AssignmentError::LabelMismatch {
                axis: Axis::Rows,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_matrix_errors_win_over_labels() {
        let problem = AssignmentProblem::new(Vec::new(), Objective::Minimize)
            .with_labels(AxisLabels::defaults(1, 1));

        assert!(matches!(
            problem.normalize(128),
            Err(AssignmentError::EmptyMatrix { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_defaults() {
        let problem: AssignmentProblem =
            serde_json::from_str(r#"{ "matrix": [[1.0, 2.0], [3.0, 4.0]] }"#).unwrap();
        assert_eq!(problem.objective, Objective::Minimize);
        assert!(problem.labels.is_none());

        let problem: AssignmentProblem = serde_json::from_str(
            r#"{ "matrix": [[1.0]], "objective": "maximize", "labels": { "rows": ["a"], "cols": ["b"] } }"#,
        )
        .unwrap();
        assert_eq!(problem.objective, Objective::Maximize);
        assert_eq!(problem.labels.unwrap().row(0), "a");
    }
}
