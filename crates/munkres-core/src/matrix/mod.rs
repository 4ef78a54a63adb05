//! Normalized cost matrix.
//!
//! A [`CostMatrix`] owns two views of the same problem:
//! - the raw `rows x cols` values exactly as the caller supplied them, used
//!   for reporting the objective in original units;
//! - the internal `size x size` cost grid the solver minimizes over, where
//!   `size = max(rows, cols)` and cells outside the raw shape hold the
//!   padding constant.

mod normalize;


use crate::objective::Objective;

/// Validated, transformed and padded cost grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    size: usize,
    // size * size, row-major
    costs: Vec<f64>,
    // rows * cols, row-major
    raw: Vec<f64>,
    objective: Objective,
    offset: f64,
    padding_value: f64,
}

impl CostMatrix {
    /// Number of rows in the caller's matrix.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the caller's matrix.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Side of the padded square.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of pairs in a complete assignment: `min(rows, cols)`.
    #[inline]
    pub fn pair_count(&self) -> usize {
        self.rows.min(self.cols)
    }

    #[inline]
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// `min(raw)` when minimizing, `max(raw)` when maximizing.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Cost stored in every padded cell.
    #[inline]
    pub fn padding_value(&self) -> f64 {
        self.padding_value
    }

    /// Internal cost at `(row, col)` of the padded square.
    #[inline]
    pub fn cost(&self, row: usize, col: usize) -> f64 {
        self.costs[row * self.size + col]
    }

    /// Internal costs of one row of the padded square.
    #[inline]
    pub fn cost_row(&self, row: usize) -> &[f64] {
        &self.costs[row * self.size..(row + 1) * self.size]
    }

    /// Caller's original value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the cell lies in the padding.
    #[inline]
    pub fn raw(&self, row: usize, col: usize) -> f64 {
        assert!(
            !self.is_padding(row, col),
            "raw value requested for padded cell ({row}, {col})"
        );
        self.raw[row * self.cols + col]
    }

    /// Returns true if `(row, col)` lies outside the caller's matrix.
    #[inline]
    pub fn is_padding(&self, row: usize, col: usize) -> bool {
        row >= self.rows || col >= self.cols
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Maps an internal cost back into the caller's units.
    #[inline]
    pub fn to_raw(&self, cost: f64) -> f64 {
        self.objective.to_raw(cost, self.offset)
    }

    /// Builds a `rows x cols` grid from a per-cell function.
    ///
    /// Used for trace snapshots, which always have the caller's shape.
    pub fn snapshot<F>(&self, mut cell: F) -> Vec<Vec<f64>>
    where
        F: FnMut(usize, usize) -> f64,
    {
        (0..self.rows)
            .map(|i| (0..self.cols).map(|j| cell(i, j)).collect())
            .collect()
    }

    /// Snapshot of the internal (transformed, unpadded) costs.
    pub fn cost_snapshot(&self) -> Vec<Vec<f64>> {
        self.snapshot(|i, j| self.cost(i, j))
    }
}
