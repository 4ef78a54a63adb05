//! Raw input validation and transformation.

use num_traits::ToPrimitive;

use super::CostMatrix;
use crate::error::{AssignmentError, InvalidCell, Result};
use crate::objective::Objective;

impl CostMatrix {
    /// Validates `raw` and builds the internal cost matrix.
    ///
    /// Every cell must convert to a finite `f64` and every row must have the
    /// length of the first one. Checks run eagerly in row-major order, so the
    /// first offending cell is the one reported; nothing is built on failure.
    ///
    /// Rectangular input is padded to a square of side `max(rows, cols)` with
    /// `2 * (span + 1)`, where `span = max(raw) - min(raw)`. Every real
    /// internal cost lies in `[0, span]`, so padding is strictly more
    /// expensive than any real cell.
    ///
    /// # Errors
    ///
    /// - [`AssignmentError::EmptyMatrix`] if there are no rows or no columns
    /// - [`AssignmentError::MatrixTooLarge`] if a side exceeds `max_dimension`
    /// - [`AssignmentError::InvalidInput`] for ragged, non-numeric or
    ///   non-finite cells, or a value range that overflows
    ///
    /// # Examples
    ///
    /// ```
    /// use munkres_core::{CostMatrix, Objective};
    ///
    /// let matrix = CostMatrix::normalize(&[[4, 1, 3], [2, 0, 5]], Objective::Minimize, 128).unwrap();
    /// assert_eq!(matrix.size(), 3);
    /// assert!(matrix.is_padding(2, 0));
    /// assert_eq!(matrix.cost(0, 0), 4.0);
    /// ```
    pub fn normalize<T, R>(raw: &[R], objective: Objective, max_dimension: usize) -> Result<Self>
    where
        T: ToPrimitive,
        R: AsRef<[T]>,
    {
        let rows = raw.len();
        let cols = raw.first().map_or(0, |row| row.as_ref().len());

        if rows == 0 || cols == 0 {
            return Err(AssignmentError::EmptyMatrix { rows, cols });
        }
        if rows > max_dimension || cols > max_dimension {
            return Err(AssignmentError::MatrixTooLarge {
                rows,
                cols,
                limit: max_dimension,
            });
        }

        let mut values = Vec::with_capacity(rows * cols);
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut max_at = (0, 0);

        for (i, row) in raw.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(AssignmentError::InvalidInput {
                    row: i,
                    col: row.len().min(cols),
                    reason: InvalidCell::RaggedRow {
                        expected: cols,
                        found: row.len(),
                    },
                });
            }
            for (j, cell) in row.iter().enumerate() {
                let value = cell.to_f64().ok_or(AssignmentError::InvalidInput {
                    row: i,
                    col: j,
                    reason: InvalidCell::NonNumeric,
                })?;
                if !value.is_finite() {
                    return Err(AssignmentError::InvalidInput {
                        row: i,
                        col: j,
                        reason: InvalidCell::NonFinite,
                    });
                }
                min = min.min(value);
                if value > max {
                    max = value;
                    max_at = (i, j);
                }
                values.push(value);
            }
        }

        let span = max - min;
        let padding_value = 2.0 * (span + 1.0);
        if !padding_value.is_finite() {
            return Err(AssignmentError::InvalidInput {
                row: max_at.0,
                col: max_at.1,
                reason: InvalidCell::ValueRange,
            });
        }

        let offset = objective.offset(min, max);
        let size = rows.max(cols);
        let mut costs = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                if i < rows && j < cols {
                    costs.push(objective.to_cost(values[i * cols + j], offset));
                } else {
                    costs.push(padding_value);
                }
            }
        }

        Ok(Self {
            rows,
            cols,
            size,
            costs,
            raw: values,
            objective,
            offset,
            padding_value,
        })
    }
}
