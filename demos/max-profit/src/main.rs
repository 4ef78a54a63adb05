//! Max-Profit Example
//!
//! Assigns workers to tasks so the total profit is as large as possible.
//!
//! ```text
//! cargo run -p max-profit                      # built-in 3x3 grid
//! cargo run -p max-profit -- problem.toml      # problem from a file
//! cargo run -p max-profit -- problem.toml --json
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use munkres::prelude::*;
use thiserror::Error;

/// Failure to obtain a problem from disk.
#[derive(Debug, Error)]
enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// The built-in worker/task profit grid.
fn default_problem() -> AssignmentProblem {
    AssignmentProblem::new(
        vec![
            vec![9.0, 2.0, 7.0],
            vec![3.0, 4.0, 6.0],
            vec![5.0, 8.0, 1.0],
        ],
        Objective::Maximize,
    )
    .with_labels(AxisLabels::new(
        ["Ana", "Budi", "Citra"],
        ["Paint", "Weld", "Pack"],
    ))
}

fn load_problem(path: &Path) -> Result<AssignmentProblem, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn print_assignment(problem: &AssignmentProblem, assignment: &Assignment) {
    let labels = problem
        .labels
        .clone()
        .unwrap_or_else(|| AxisLabels::defaults(problem.rows(), problem.cols()));
    let width = labels.rows.iter().map(String::len).max().unwrap_or(0);

    println!("\n{} assignment:", assignment.objective());
    for pair in assignment.pairs() {
        println!(
            "  {:<width$}  ->  {:<12} {:>8}",
            labels.row(pair.row),
            labels.col(pair.col),
            pair.value,
        );
    }
    println!("  {}", "-".repeat(width + 26));
    println!("  {:<width$}      {:<12} {:>8}", "Total", "", assignment.total());
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let path = args.iter().find(|a| !a.starts_with("--"));

    let problem = match path {
        Some(path) => match load_problem(Path::new(path)) {
            Ok(problem) => problem,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => default_problem(),
    };

    if !json {
        munkres::console::init();
    }

    let report = match munkres::solve_problem(&problem) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("cannot solve: {err}");
            return ExitCode::FAILURE;
        }
    };
    let assignment = report.solution.assignment();

    if json {
        match serde_json::to_string_pretty(assignment) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("cannot serialize: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_assignment(&problem, assignment);
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest_path(file: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join(file)
    }

    #[test]
    fn test_bundled_problem_loads() {
        let problem = load_problem(&manifest_path("problem.toml")).unwrap();
        assert_eq!(problem.objective, Objective::Maximize);
        assert_eq!((problem.rows(), problem.cols()), (4, 4));

        let report = munkres::solve_problem(&problem).unwrap();
        assert_eq!(report.solution.total(), 33.0);
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = load_problem(&manifest_path("no-such-problem.toml")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().starts_with("cannot read"));
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        // Cargo.toml has no `matrix` key.
        let err = load_problem(&manifest_path("Cargo.toml")).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_default_problem_total() {
        let report = munkres::solve_problem(&default_problem()).unwrap();
        assert_eq!(report.solution.total(), 23.0);
    }
}
