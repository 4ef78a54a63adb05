//! Solver entry points that hide all internal wiring.

use munkres_config::{ConfigError, SolverConfig};
use munkres_core::{Assignment, AssignmentProblem, Objective, Result};
use munkres_solver::{AssignmentSolver, SolveReport};
use num_traits::ToPrimitive;
use tracing::warn;

/// Configuration file picked up from the working directory, if present.
const CONFIG_FILE: &str = "munkres.toml";

fn default_solver() -> AssignmentSolver {
    match SolverConfig::load(CONFIG_FILE).and_then(AssignmentSolver::new) {
        Ok(solver) => solver,
        Err(ConfigError::Io(_)) => AssignmentSolver::default(),
        Err(err) => {
            warn!(event = "config_ignored", file = CONFIG_FILE, error = %err);
            AssignmentSolver::default()
        }
    }
}

/// Solves `raw` for `objective` with the ambient configuration.
///
/// Reads `munkres.toml` from the working directory when it exists; an
/// unreadable or invalid file falls back to defaults with a warning.
pub fn solve<T, R>(raw: &[R], objective: Objective) -> Result<Assignment>
where
    T: ToPrimitive,
    R: AsRef<[T]>,
{
    Ok(default_solver().solve(raw, objective)?.into_assignment())
}

/// Minimum-cost assignment of `raw`.
pub fn minimize<T, R>(raw: &[R]) -> Result<Assignment>
where
    T: ToPrimitive,
    R: AsRef<[T]>,
{
    solve(raw, Objective::Minimize)
}

/// Maximum-profit assignment of `raw`.
pub fn maximize<T, R>(raw: &[R]) -> Result<Assignment>
where
    T: ToPrimitive,
    R: AsRef<[T]>,
{
    solve(raw, Objective::Maximize)
}

/// Solves a problem bundle with the ambient configuration.
pub fn solve_problem(problem: &AssignmentProblem) -> Result<SolveReport> {
    default_solver().solve_problem(problem)
}

#[cfg(test)]
mod tests {
    use munkres_core::AssignmentError;
    use munkres_test::fixtures;

    use super::*;

    #[test]
    fn test_minimize_and_maximize() {
        let raw = fixtures::worked_example();
        assert_eq!(minimize(&raw).unwrap().total(), 10.0);
        assert_eq!(maximize(&raw).unwrap().total(), 14.0);
    }

    #[test]
    fn test_integer_rows() {
        let assignment = minimize(&[[4u32, 1, 3], [2, 0, 5]]).unwrap();
        assert_eq!(assignment.indices(), vec![(0, 1), (1, 0)]);
        assert_eq!(assignment.total(), 3.0);
    }

    #[test]
    fn test_errors_surface() {
        let empty: [[f64; 0]; 0] = [];
        assert!(matches!(
            minimize(&empty),
            Err(AssignmentError::EmptyMatrix { .. })
        ));
    }

    #[test]
    fn test_solve_problem_keeps_labels() {
        let report = solve_problem(&fixtures::profit_problem()).unwrap();
        let assignment = report.solution.assignment();
        assert_eq!(assignment.total(), 23.0);
        assert!(assignment.labels().is_some());
    }
}
