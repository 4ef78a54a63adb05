//! Munkres Solver Engine
//!
//! This crate provides the assignment solving pipeline:
//! - [`reducer`]: initial row/column reduction into dual potentials
//! - [`matcher`]: alternating-path augmentation with dual updates
//! - [`assembler`]: mapping the matching back to the caller's matrix
//! - [`solver`]: the [`AssignmentSolver`] entry point wiring it together
//!
//! # Example
//!
//! ```
//! use munkres_core::Objective;
//! use munkres_solver::AssignmentSolver;
//!
//! let solver = AssignmentSolver::default();
//! let solution = solver
//!     .solve(&[[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [3.0, 6.0, 9.0]], Objective::Minimize)
//!     .unwrap();
//!
//! assert_eq!(solution.total(), 10.0);
//! assert_eq!(solution.assignment().indices(), vec![(0, 2), (1, 1), (2, 0)]);
//! ```

pub mod assembler;
pub mod matcher;
pub mod reducer;
pub mod solver;
pub mod statistics;

pub use assembler::assemble;
pub use matcher::{AugmentingPathMatcher, MatcherCounts, MatcherOutcome};
pub use reducer::{initial_reduction, Reduction};
pub use solver::{AssignmentSolver, Solution, SolveReport};
pub use statistics::SolveStatistics;
