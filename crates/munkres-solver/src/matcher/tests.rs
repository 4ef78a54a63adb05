//! Tests for the augmenting-path matcher.

use munkres_core::{AssignmentError, NoTrace, Objective, TraceRecorder};

use super::*;
use crate::reducer::initial_reduction;

const TOLERANCE: f64 = 1e-9;

fn normalize(raw: &[Vec<f64>]) -> CostMatrix {
    CostMatrix::normalize(raw, Objective::Minimize, 16).unwrap()
}

fn run(matrix: &CostMatrix) -> MatcherOutcome {
    let reduction = initial_reduction(matrix);
    AugmentingPathMatcher::new(matrix, reduction.potentials, TOLERANCE)
        .run(&mut NoTrace)
        .unwrap()
}

#[test]
fn test_worked_example() {
    let matrix = normalize(&[
        vec![1.0, 2.0, 3.0],
        vec![2.0, 4.0, 6.0],
        vec![3.0, 6.0, 9.0],
    ]);
    let outcome = run(&matrix);

    assert_eq!(outcome.matching.pairs(), vec![(0, 2), (1, 1), (2, 0)]);
    assert_eq!(outcome.counts.augmentations, 3);
    assert_eq!(outcome.counts.dual_updates, 1);
    assert_eq!(
        outcome.potentials.verify(&matrix, &outcome.matching, TOLERANCE),
        Ok(())
    );
}

#[test]
fn test_greedy_first_zero_is_not_enough() {
    // After reduction every row has a zero in column 0; picking the first
    // zero per row cannot complete, the search has to reroute.
    let matrix = normalize(&[
        vec![0.0, 1.0, 1.0],
        vec![0.0, 3.0, 4.0],
        vec![0.0, 4.0, 2.0],
    ]);
    let outcome = run(&matrix);

    let total: f64 = outcome
        .matching
        .pairs()
        .iter()
        .map(|&(i, j)| matrix.cost(i, j))
        .sum();
    assert_eq!(total, 3.0);
    assert!(outcome.matching.is_perfect());
}

#[test]
fn test_lowest_free_column_wins_ties() {
    let matrix = normalize(&[vec![0.0, 0.0, 0.0], vec![0.0, 0.0, 0.0]]);
    let outcome = run(&matrix);

    let real: Vec<_> = outcome
        .matching
        .pairs()
        .into_iter()
        .filter(|&(i, j)| !matrix.is_padding(i, j))
        .collect();
    assert_eq!(real, vec![(0, 0), (1, 1)]);
}

#[test]
fn test_single_cell() {
    let matrix = normalize(&[vec![5.0]]);
    let outcome = run(&matrix);

    assert_eq!(outcome.matching.pairs(), vec![(0, 0)]);
    assert_eq!(outcome.counts.dual_updates, 0);
}

#[test]
fn test_trace_records_every_round() {
    let matrix = normalize(&[
        vec![1.0, 2.0, 3.0],
        vec![2.0, 4.0, 6.0],
        vec![3.0, 6.0, 9.0],
    ]);
    let reduction = initial_reduction(&matrix);
    let mut recorder = TraceRecorder::new();
    let outcome = AugmentingPathMatcher::new(&matrix, reduction.potentials, TOLERANCE)
        .run(&mut recorder)
        .unwrap();

    assert_eq!(recorder.count(Stage::Augmented) as u64, outcome.counts.augmentations);
    assert_eq!(recorder.count(Stage::DualUpdate) as u64, outcome.counts.dual_updates);

    let update = recorder
        .steps()
        .iter()
        .find(|s| s.stage() == Stage::DualUpdate)
        .unwrap();
    assert_eq!(update.annotations().delta, Some(1.0));
    assert_eq!(update.annotations().visited_rows.as_deref(), Some(&[1, 2][..]));
    assert_eq!(update.annotations().visited_cols.as_deref(), Some(&[0][..]));
    for row in update.matrix() {
        for value in row {
            assert!(*value >= -TOLERANCE);
        }
    }

    let last = recorder.steps().last().unwrap();
    assert_eq!(last.stage(), Stage::Augmented);
    assert_eq!(last.annotations().augmented_row, Some(2));
    assert_eq!(last.matching(), Some(&[(0, 2), (1, 1), (2, 0)][..]));
}

#[test]
fn test_trace_hides_padding() {
    let matrix = normalize(&[vec![4.0, 1.0, 3.0]]);
    let reduction = initial_reduction(&matrix);
    let mut recorder = TraceRecorder::new();
    AugmentingPathMatcher::new(&matrix, reduction.potentials, TOLERANCE)
        .run(&mut recorder)
        .unwrap();

    for step in recorder.steps() {
        assert_eq!(step.matrix().len(), 1);
        assert_eq!(step.matrix()[0].len(), 3);
        for &(i, _) in step.matching().unwrap_or(&[]) {
            assert_eq!(i, 0);
        }
    }
    let last = recorder.steps().last().unwrap();
    assert_eq!(last.matching(), Some(&[(0, 1)][..]));
}

#[test]
fn test_augment_from_grows_by_one() {
    let matrix = normalize(&[vec![3.0, 1.0], vec![1.0, 3.0]]);
    let reduction = initial_reduction(&matrix);
    let mut matcher = AugmentingPathMatcher::new(&matrix, reduction.potentials, TOLERANCE);

    matcher.augment_from(1, &mut NoTrace).unwrap();
    assert_eq!(matcher.matching().len(), 1);
    assert_eq!(matcher.matching().col_of(1), Some(0));

    matcher.augment_from(0, &mut NoTrace).unwrap();
    assert!(matcher.matching().is_perfect());
    assert_eq!(matcher.matching().col_of(0), Some(1));
}

#[test]
#[should_panic(expected = "already matched")]
fn test_augment_from_matched_row_panics() {
    let matrix = normalize(&[vec![3.0, 1.0], vec![1.0, 3.0]]);
    let reduction = initial_reduction(&matrix);
    let mut matcher = AugmentingPathMatcher::new(&matrix, reduction.potentials, TOLERANCE);

    matcher.augment_from(0, &mut NoTrace).unwrap();
    let _ = matcher.augment_from(0, &mut NoTrace);
}

#[test]
#[should_panic(expected = "potentials of size")]
fn test_shape_mismatch_panics() {
    let matrix = normalize(&[vec![3.0, 1.0], vec![1.0, 3.0]]);
    AugmentingPathMatcher::new(&matrix, Potentials::zeros(3), TOLERANCE);
}

#[test]
fn test_unreachable_columns_surface_an_error() {
    let matrix = normalize(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
    // Every reduced cost is +inf, so no column is ever reachable.
    let potentials = Potentials::from_parts(vec![f64::NEG_INFINITY; 2], vec![0.0; 2]);

    let mut recorder = TraceRecorder::new();
    let result = AugmentingPathMatcher::new(&matrix, potentials, TOLERANCE).run(&mut recorder);

    assert_eq!(result, Err(AssignmentError::NoFeasibleAssignment { row: 0 }));
    assert!(recorder.is_empty());
}

#[test]
#[should_panic(expected = "tolerance must be finite and non-negative")]
fn test_nan_tolerance_panics() {
    let matrix = normalize(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
    let reduction = initial_reduction(&matrix);
    let _ = AugmentingPathMatcher::new(&matrix, reduction.potentials, f64::NAN);
}

#[test]
#[should_panic(expected = "tolerance must be finite and non-negative")]
fn test_negative_tolerance_panics() {
    let matrix = normalize(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
    let reduction = initial_reduction(&matrix);
    let _ = AugmentingPathMatcher::new(&matrix, reduction.potentials, -1.0);
}
