//! Munkres Core - Core types for assignment solving
//!
//! This crate provides the data model shared by the solver and its callers:
//! - [`CostMatrix`]: validated, normalized, padded cost grid
//! - [`Objective`]: minimize or maximize, with the invertible cost transform
//! - [`Potentials`] and [`Matching`]: the primal-dual working state
//! - [`Assignment`]: the final pairing in the caller's original units
//! - [`trace`]: replayable step snapshots and the sink they are recorded into

pub mod assignment;
pub mod error;
pub mod labels;
pub mod matching;
pub mod matrix;
pub mod objective;
pub mod potentials;
pub mod problem;
pub mod trace;

pub use assignment::{AssignedPair, Assignment, LabeledPair};
pub use error::{AssignmentError, InvalidCell, Result};
pub use labels::{Axis, AxisLabels};
pub use matching::Matching;
pub use matrix::CostMatrix;
pub use objective::Objective;
pub use potentials::{CertificateViolation, Potentials};
pub use problem::AssignmentProblem;
pub use trace::{Annotations, NoTrace, Stage, TraceRecorder, TraceSink, TraceStep};

/// Default absolute tolerance for comparisons against zero.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Default upper bound on either matrix dimension.
pub const DEFAULT_MAX_DIMENSION: usize = 128;
