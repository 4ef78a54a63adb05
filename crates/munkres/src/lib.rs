//! Munkres - Optimal Assignment in Rust
//!
//! Zero-wiring API: hand over a rectangular grid of numbers and get back the
//! best one-to-one pairing of rows to columns.
//!
//! # Example
//!
//! ```rust
//! use munkres::prelude::*;
//!
//! let profit = [[9, 2, 7], [3, 4, 6], [5, 8, 1]];
//! let assignment = munkres::maximize(&profit).unwrap();
//! assert_eq!(assignment.total(), 23.0);
//! assert_eq!(assignment.col_for_row(0), Some(0));
//! ```

// Data model
pub use munkres_core::{
    AssignedPair, Assignment, AssignmentError, AssignmentProblem, Axis, AxisLabels, CostMatrix,
    InvalidCell, LabeledPair, Objective, Result,
};

// Step trace
pub use munkres_core::trace;
pub use munkres_core::{Annotations, NoTrace, Stage, TraceRecorder, TraceSink, TraceStep};

// Configuration
pub use munkres_config::{ConfigError, EnvironmentMode, SolverConfig};

// Solver
pub use munkres_solver::{AssignmentSolver, Solution, SolveReport, SolveStatistics};

#[cfg(feature = "console")]
pub use munkres_console as console;

mod solve;
pub use solve::{maximize, minimize, solve, solve_problem};

pub mod prelude {
    pub use super::{
        Assignment, AssignmentError, AssignmentProblem, AssignmentSolver, AxisLabels, Objective,
        SolverConfig, Stage, TraceStep,
    };
}
