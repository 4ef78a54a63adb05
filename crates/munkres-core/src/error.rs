//! Error types for assignment solving

use thiserror::Error;

use crate::labels::Axis;

/// Reason a raw input cell was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidCell {
    /// The value has no `f64` representation.
    NonNumeric,

    /// The value is NaN or infinite.
    NonFinite,

    /// The row length differs from the first row.
    RaggedRow { expected: usize, found: usize },

    /// `max - min` over the matrix is not representable as a finite `f64`.
    ValueRange,
}

/// Main error type for assignment solving.
///
/// Every variant carries the structured context a caller needs to render its
/// own message; the `Display` impls are terse diagnostics only.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssignmentError {
    /// A cell is malformed or non-finite.
    #[error("invalid cell at ({row}, {col}): {reason:?}")]
    InvalidInput {
        row: usize,
        col: usize,
        reason: InvalidCell,
    },

    /// The matrix has no rows or no columns.
    #[error("empty matrix ({rows}x{cols})")]
    EmptyMatrix { rows: usize, cols: usize },

    /// A dimension exceeds the configured maximum.
    #[error("matrix {rows}x{cols} exceeds maximum dimension {limit}")]
    MatrixTooLarge {
        rows: usize,
        cols: usize,
        limit: usize,
    },

    /// The alternating search from `row` cannot reach any free column.
    #[error("no feasible assignment for row {row}")]
    NoFeasibleAssignment { row: usize },

    /// Axis labels do not match the matrix shape.
    #[error("{axis:?} labels: expected {expected}, found {found}")]
    LabelMismatch {
        axis: Axis,
        expected: usize,
        found: usize,
    },
}

/// Result type alias for assignment operations
pub type Result<T> = std::result::Result<T, AssignmentError>;
