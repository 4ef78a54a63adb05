//! Replayable solve traces.
//!
//! The solver reports checkpoints to a [`TraceSink`]. Sinks are passed by
//! generic parameter, so a solve with [`NoTrace`] compiles the checkpoints
//! away: the step builder closure handed to [`TraceSink::record_with`] is
//! never called and no snapshot is allocated.
//!
//! # Usage
//!
//! ```
//! use munkres_core::trace::{Stage, TraceRecorder, TraceSink, TraceStep};
//!
//! let mut recorder = TraceRecorder::new();
//! recorder.record_with(|| TraceStep::new(Stage::Normalized, vec![vec![0.0]]));
//!
//! assert_eq!(recorder.len(), 1);
//! assert_eq!(recorder.steps()[0].stage(), Stage::Normalized);
//! ```


use std::fmt;

/// Checkpoint at which a [`TraceStep`] was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Stage {
    /// Input validated and transformed; snapshot holds internal costs.
    Normalized,

    /// Row then column minima subtracted.
    InitialReduction,

    /// No tight edge left the search frontier; potentials moved by `delta`.
    DualUpdate,

    /// An augmenting path was flipped and the matching grew by one.
    Augmented,

    /// Perfect matching found.
    Completed,
}

impl Stage {
    /// Stable lowercase name, suitable as a display key.
    pub fn name(self) -> &'static str {
        match self {
            Stage::Normalized => "normalized",
            Stage::InitialReduction => "initial_reduction",
            Stage::DualUpdate => "dual_update",
            Stage::Augmented => "augmented",
            Stage::Completed => "completed",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stage-specific scalar and vector annotations.
///
/// Fields not relevant to a stage are `None`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotations {
    /// Per-row minima subtracted during the initial reduction.
    pub row_minima: Option<Vec<f64>>,

    /// Per-column minima subtracted after the row pass.
    pub col_minima: Option<Vec<f64>>,

    /// The smallest slack between the search frontier and unvisited columns.
    pub delta: Option<f64>,

    /// Rows reached by the alternating search (potentials raised).
    pub visited_rows: Option<Vec<usize>>,

    /// Columns reached by the alternating search (potentials lowered).
    pub visited_cols: Option<Vec<usize>>,

    /// Row whose augmenting path was flipped.
    pub augmented_row: Option<usize>,

    /// Objective value in the caller's units.
    pub objective: Option<f64>,
}

/// Immutable snapshot of solver state at one checkpoint.
///
/// The matrix snapshot always has the caller's `rows x cols` shape; padding
/// is never shown. Matching pairs are likewise restricted to real cells.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceStep {
    stage: Stage,
    matrix: Vec<Vec<f64>>,
    annotations: Annotations,
    matching: Option<Vec<(usize, usize)>>,
}

impl TraceStep {
    pub fn new(stage: Stage, matrix: Vec<Vec<f64>>) -> Self {
        Self {
            stage,
            matrix,
            annotations: Annotations::default(),
            matching: None,
        }
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn with_matching(mut self, pairs: Vec<(usize, usize)>) -> Self {
        self.matching = Some(pairs);
        self
    }

    #[inline]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }

    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    pub fn matching(&self) -> Option<&[(usize, usize)]> {
        self.matching.as_deref()
    }
}

/// Destination for trace steps.
///
/// Implementations must not influence the solve: the solver's control flow
/// is identical whether or not a sink is enabled.
pub trait TraceSink {
    /// Whether steps should be built at all.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Appends one step.
    fn record(&mut self, step: TraceStep);

    /// Builds and appends a step only when the sink is enabled.
    #[inline]
    fn record_with<F>(&mut self, build: F)
    where
        F: FnOnce() -> TraceStep,
        Self: Sized,
    {
        if self.is_enabled() {
            self.record(build());
        }
    }
}

impl<T: TraceSink + ?Sized> TraceSink for &mut T {
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }

    fn record(&mut self, step: TraceStep) {
        (**self).record(step);
    }
}

/// Disabled sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    #[inline]
    fn is_enabled(&self) -> bool {
        false
    }

    #[inline]
    fn record(&mut self, _step: TraceStep) {}
}

/// Sink that keeps every step in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceRecorder {
    steps: Vec<TraceStep>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<TraceStep> {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Stages in recording order.
    pub fn stages(&self) -> impl Iterator<Item = Stage> + '_ {
        self.steps.iter().map(TraceStep::stage)
    }

    /// Number of steps recorded at `stage`.
    pub fn count(&self, stage: Stage) -> usize {
        self.stages().filter(|s| *s == stage).count()
    }
}

impl TraceSink for TraceRecorder {
    fn record(&mut self, step: TraceStep) {
        self.steps.push(step);
    }
}
