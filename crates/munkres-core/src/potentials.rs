//! Row and column dual potentials.
//!
//! The potentials `u` (rows) and `v` (columns) certify a lower bound on the
//! optimal cost: as long as `cost[i][j] - u[i] - v[j] >= 0` everywhere, any
//! perfect matching costs at least `sum(u) + sum(v)`. A perfect matching
//! that uses only tight cells (reduced cost zero) meets that bound and is
//! therefore optimal.

use thiserror::Error;

use crate::matching::Matching;
use crate::matrix::CostMatrix;

/// A failed duality check.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CertificateViolation {
    /// `u[row] + v[col]` exceeds `cost[row][col]`.
    #[error("dual infeasible at ({row}, {col}): reduced cost {reduced}")]
    DualInfeasible { row: usize, col: usize, reduced: f64 },

    /// A matched pair is not tight.
    #[error("matched pair ({row}, {col}) is not tight: reduced cost {reduced}")]
    NotTight { row: usize, col: usize, reduced: f64 },

    /// The matching does not cover every row and column.
    #[error("matching is not perfect: {matched} of {size} pairs")]
    Incomplete { matched: usize, size: usize },

    /// Potential vectors do not match the matrix.
    #[error("potentials of size {found} for a matrix of size {expected}")]
    ShapeMismatch { expected: usize, found: usize },
}

/// Dual potentials over the padded square.
#[derive(Debug, Clone, PartialEq)]
pub struct Potentials {
    u: Vec<f64>,
    v: Vec<f64>,
}

impl Potentials {
    /// All-zero potentials of the given size.
    pub fn zeros(size: usize) -> Self {
        Self {
            u: vec![0.0; size],
            v: vec![0.0; size],
        }
    }

    /// # Panics
    ///
    /// Panics if `u` and `v` differ in length.
    pub fn from_parts(u: Vec<f64>, v: Vec<f64>) -> Self {
        assert_eq!(u.len(), v.len(), "row and column potentials differ in size");
        Self { u, v }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.u.len()
    }

    #[inline]
    pub fn row(&self, i: usize) -> f64 {
        self.u[i]
    }

    #[inline]
    pub fn col(&self, j: usize) -> f64 {
        self.v[j]
    }

    pub fn rows(&self) -> &[f64] {
        &self.u
    }

    pub fn cols(&self) -> &[f64] {
        &self.v
    }

    #[inline]
    pub fn raise_row(&mut self, i: usize, delta: f64) {
        self.u[i] += delta;
    }

    #[inline]
    pub fn lower_col(&mut self, j: usize, delta: f64) {
        self.v[j] -= delta;
    }

    /// `cost[i][j] - u[i] - v[j]`.
    #[inline]
    pub fn reduced_cost(&self, matrix: &CostMatrix, i: usize, j: usize) -> f64 {
        matrix.cost(i, j) - self.u[i] - self.v[j]
    }

    /// Returns true if `(i, j)` is on the equality subgraph.
    #[inline]
    pub fn is_tight(&self, matrix: &CostMatrix, i: usize, j: usize, tolerance: f64) -> bool {
        self.reduced_cost(matrix, i, j).abs() <= tolerance
    }

    /// Lower bound on the cost of any perfect matching: `sum(u) + sum(v)`.
    pub fn dual_objective(&self) -> f64 {
        self.u.iter().sum::<f64>() + self.v.iter().sum::<f64>()
    }

    /// The reduced matrix in the caller's shape, for trace snapshots.
    pub fn reduced_snapshot(&self, matrix: &CostMatrix) -> Vec<Vec<f64>> {
        matrix.snapshot(|i, j| self.reduced_cost(matrix, i, j))
    }

    /// Checks weak and strong duality for a completed solve.
    ///
    /// Verifies that every reduced cost is at least `-tolerance` and that
    /// every matched pair has a reduced cost within `tolerance` of zero.
    /// Independent of how the matching was found, so it serves as an
    /// optimality oracle for matrices too large to brute force.
    pub fn verify(
        &self,
        matrix: &CostMatrix,
        matching: &Matching,
        tolerance: f64,
    ) -> Result<(), CertificateViolation> {
        let size = matrix.size();
        if self.size() != size {
            return Err(CertificateViolation::ShapeMismatch {
                expected: size,
                found: self.size(),
            });
        }
        if !matching.is_perfect() {
            return Err(CertificateViolation::Incomplete {
                matched: matching.len(),
                size,
            });
        }

        for i in 0..size {
            for j in 0..size {
                let reduced = self.reduced_cost(matrix, i, j);
                if reduced < -tolerance {
                    return Err(CertificateViolation::DualInfeasible { row: i, col: j, reduced });
                }
            }
        }

        for (row, col) in matching.pairs() {
            let reduced = self.reduced_cost(matrix, row, col);
            if reduced.abs() > tolerance {
                return Err(CertificateViolation::NotTight { row, col, reduced });
            }
        }

        Ok(())
    }
}
