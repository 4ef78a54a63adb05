//! Opaque axis labels carried alongside a matrix.

use crate::error::{AssignmentError, Result};

/// Matrix axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Axis {
    Rows,
    Columns,
}

/// Row (worker) and column (task) labels.
///
/// Labels are never interpreted by the solver; they only travel with the
/// result so a caller can print `worker -> task` lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisLabels {
    pub rows: Vec<String>,
    pub cols: Vec<String>,
}

impl AxisLabels {
    pub fn new<R, C>(rows: R, cols: C) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows.into_iter().map(Into::into).collect(),
            cols: cols.into_iter().map(Into::into).collect(),
        }
    }

    /// `Worker 1..=n` and `Task 1..=m`.
    pub fn defaults(rows: usize, cols: usize) -> Self {
        Self {
            rows: (1..=rows).map(|i| format!("Worker {i}")).collect(),
            cols: (1..=cols).map(|j| format!("Task {j}")).collect(),
        }
    }

    /// Checks the label counts against a `rows x cols` matrix.
    pub fn validate(&self, rows: usize, cols: usize) -> Result<()> {
        if self.rows.len() != rows {
            return Err(AssignmentError::LabelMismatch {
                axis: Axis::Rows,
                expected: rows,
                found: self.rows.len(),
            });
        }
        if self.cols.len() != cols {
            return Err(AssignmentError::LabelMismatch {
                axis: Axis::Columns,
                expected: cols,
                found: self.cols.len(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn row(&self, i: usize) -> &str {
        &self.rows[i]
    }

    #[inline]
    pub fn col(&self, j: usize) -> &str {
        &self.cols[j]
    }
}
