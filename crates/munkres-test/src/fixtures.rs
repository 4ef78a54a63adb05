//! Hand-checked matrices.

use munkres_core::{AssignmentProblem, AxisLabels, Objective};

/// `[[1,2,3],[2,4,6],[3,6,9]]`; minimum 10 via `(0,2) (1,1) (2,0)`, maximum
/// 14 on the diagonal.
pub fn worked_example() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, 2.0, 3.0],
        vec![2.0, 4.0, 6.0],
        vec![3.0, 6.0, 9.0],
    ]
}

/// A worker/task profit grid with labels; maximum 23 via
/// `Ana -> Paint (9)`, `Budi -> Pack (6)`, `Citra -> Weld (8)`.
pub fn profit_problem() -> AssignmentProblem {
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

/// Every row's cheapest cell sits in column 0; a solver that takes the first
/// zero per row after reduction gets stuck. Minimum 3.
pub fn shared_minimum_column() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 1.0, 1.0],
        vec![0.0, 3.0, 4.0],
        vec![0.0, 4.0, 2.0],
    ]
}

/// Classic 4x4 textbook instance; minimum 32 via `(0,3) (1,0) (2,2) (3,1)`,
/// maximum 53.
pub fn textbook_four() -> Vec<Vec<f64>> {
    vec![
        vec![9.0, 11.0, 14.0, 11.0],
        vec![6.0, 15.0, 13.0, 13.0],
        vec![12.0, 13.0, 6.0, 8.0],
        vec![11.0, 9.0, 10.0, 12.0],
    ]
}

/// Negative and fractional values; minimum -7.25 via `(0,1) (1,0)`.
pub fn signed_fractional() -> Vec<Vec<f64>> {
    vec![vec![0.5, -4.0], vec![-3.25, 2.0]]
}
