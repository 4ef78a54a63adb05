//! Solver entry point.
//!
//! [`AssignmentSolver`] runs the full pipeline on every call:
//!
//! ```text
//! raw -> normalize -> initial_reduction -> AugmentingPathMatcher -> assemble
//! ```
//!
//! The solver holds only its configuration. Each call owns its matrix,
//! potentials and matching, so one solver can be shared freely between
//! threads.


use std::time::Instant;

use munkres_config::{ConfigError, SolverConfig};
use munkres_core::{
    Annotations, Assignment, AssignmentProblem, CertificateViolation, CostMatrix, Matching,
    NoTrace, Objective, Potentials, Result, Stage, TraceRecorder, TraceSink, TraceStep,
};
use num_traits::ToPrimitive;
use tracing::{debug, info};

use crate::assembler::assemble;
use crate::matcher::AugmentingPathMatcher;
use crate::reducer::initial_reduction;
use crate::statistics::SolveStatistics;

/// Result of one solve, with the working state that certifies it.
#[derive(Debug, Clone)]
pub struct Solution {
    assignment: Assignment,
    matrix: CostMatrix,
    potentials: Potentials,
    matching: Matching,
    statistics: SolveStatistics,
}

impl Solution {
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn into_assignment(self) -> Assignment {
        self.assignment
    }

    /// Objective value in the caller's units.
    pub fn total(&self) -> f64 {
        self.assignment.total()
    }

    /// The normalized matrix the solve ran on.
    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    /// Final dual potentials over the padded square.
    pub fn potentials(&self) -> &Potentials {
        &self.potentials
    }

    /// Perfect matching over the padded square, padding included.
    pub fn matching(&self) -> &Matching {
        &self.matching
    }

    pub fn statistics(&self) -> &SolveStatistics {
        &self.statistics
    }

    /// Checks the LP duality certificate for this solution.
    pub fn verify_certificate(&self, tolerance: f64) -> std::result::Result<(), CertificateViolation> {
        self.potentials
            .verify(&self.matrix, &self.matching, tolerance)
    }
}

/// Solution plus the trace requested by the configuration.
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub solution: Solution,
    /// `Some` when `SolverConfig::trace` is enabled.
    pub trace: Option<Vec<TraceStep>>,
}

/// Kuhn-Munkres assignment solver.
#[derive(Debug, Clone, Default)]
pub struct AssignmentSolver {
    config: SolverConfig,
}

impl AssignmentSolver {
    /// Creates a solver after validating `config`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] when [`SolverConfig::validate`] rejects the
    /// configuration, e.g. a NaN or non-positive tolerance.
    pub fn new(config: SolverConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves without recording a trace.
    ///
    /// # Errors
    ///
    /// Input errors from [`CostMatrix::normalize`], or
    /// [`AssignmentError::NoFeasibleAssignment`](munkres_core::AssignmentError::NoFeasibleAssignment).
    pub fn solve<T, R>(&self, raw: &[R], objective: Objective) -> Result<Solution>
    where
        T: ToPrimitive,
        R: AsRef<[T]>,
    {
        self.solve_with_sink(raw, objective, &mut NoTrace)
    }

    /// Solves and returns every recorded step in order.
    pub fn solve_traced<T, R>(
        &self,
        raw: &[R],
        objective: Objective,
    ) -> Result<(Solution, Vec<TraceStep>)>
    where
        T: ToPrimitive,
        R: AsRef<[T]>,
    {
        let mut recorder = TraceRecorder::new();
        let solution = self.solve_with_sink(raw, objective, &mut recorder)?;
        Ok((solution, recorder.into_steps()))
    }

    /// Solves, reporting checkpoints to `sink`.
    pub fn solve_with_sink<T, R, S>(
        &self,
        raw: &[R],
        objective: Objective,
        sink: &mut S,
    ) -> Result<Solution>
    where
        T: ToPrimitive,
        R: AsRef<[T]>,
        S: TraceSink,
    {
        let start = Instant::now();
        let matrix = CostMatrix::normalize(raw, objective, self.config.max_dimension)?;
        self.run(matrix, sink, start)
    }

    /// Solves a problem bundle, attaching its labels to the assignment.
    ///
    /// Records a trace when `config.trace` is set.
    pub fn solve_problem(&self, problem: &AssignmentProblem) -> Result<SolveReport> {
        let start = Instant::now();
        let matrix = problem.normalize(self.config.max_dimension)?;

        let (mut solution, trace) = if self.config.trace {
            let mut recorder = TraceRecorder::new();
            let solution = self.run(matrix, &mut recorder, start)?;
            (solution, Some(recorder.into_steps()))
        } else {
            (self.run(matrix, &mut NoTrace, start)?, None)
        };

        if let Some(labels) = &problem.labels {
            solution.assignment = solution.assignment.with_labels(labels.clone())?;
        }
        Ok(SolveReport { solution, trace })
    }

    /// Solves an already normalized matrix.
    pub fn solve_matrix<S: TraceSink>(&self, matrix: CostMatrix, sink: &mut S) -> Result<Solution> {
        self.run(matrix, sink, Instant::now())
    }

    fn run<S: TraceSink>(&self, matrix: CostMatrix, sink: &mut S, start: Instant) -> Result<Solution> {
        let tolerance = self.config.tolerance;

        info!(
            event = "solve_start",
            rows = matrix.rows() as u64,
            cols = matrix.cols() as u64,
            size = matrix.size() as u64,
            objective = %matrix.objective(),
        );
        sink.record_with(|| TraceStep::new(Stage::Normalized, matrix.cost_snapshot()));

        let reduction = initial_reduction(&matrix);
        debug!(
            event = "reduction",
            dual_bound = reduction.potentials.dual_objective(),
        );
        sink.record_with(|| {
            let annotations = Annotations {
                row_minima: Some(reduction.row_minima[..matrix.rows()].to_vec()),
                col_minima: Some(reduction.col_minima[..matrix.cols()].to_vec()),
                ..Annotations::default()
            };
            TraceStep::new(
                Stage::InitialReduction,
                reduction.potentials.reduced_snapshot(&matrix),
            )
            .with_annotations(annotations)
        });

        let outcome =
            AugmentingPathMatcher::new(&matrix, reduction.potentials, tolerance).run(sink)?;
        let assignment = assemble(&outcome.matching, &matrix);

        sink.record_with(|| {
            let annotations = Annotations {
                objective: Some(assignment.total()),
                ..Annotations::default()
            };
            TraceStep::new(Stage::Completed, outcome.potentials.reduced_snapshot(&matrix))
                .with_annotations(annotations)
                .with_matching(assignment.indices())
        });

        let statistics = SolveStatistics::new(matrix.size(), outcome.counts, start.elapsed());
        info!(
            event = "solve_end",
            duration_ms = statistics.duration.as_millis() as u64,
            pairs = assignment.len() as u64,
            total = assignment.total(),
            augmentations = statistics.augmentations,
            dual_updates = statistics.dual_updates,
        );

        let solution = Solution {
            assignment,
            matrix,
            potentials: outcome.potentials,
            matching: outcome.matching,
            statistics,
        };

        if self.config.asserts_certificate() {
            // Rounding accumulates at most once per dual update touching a cell.
            let bound = tolerance * solution.matrix.size() as f64;
            if let Err(violation) = solution.verify_certificate(bound) {
                panic!("duality certificate violated: {violation}");
            }
        }

        Ok(solution)
    }
}
