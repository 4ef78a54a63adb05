//! Alternating-path augmentation on the equality subgraph.
//!
//! Each round grows the matching by one starting from the lowest free row.
//! The search keeps, for every unvisited column, the smallest reduced cost
//! from any visited row (`slack`) and the row achieving it (`way`). Tight
//! columns extend the alternating tree; a tight free column ends the round
//! with an augmentation. When no unvisited column is tight, the potentials of
//! visited rows rise and those of visited columns fall by the smallest slack,
//! which exposes at least one new tight edge without breaking
//! `cost - u - v >= 0` and without changing any matched edge. The search
//! then resumes from the same frontier.
//!
//! A round visits each column at most once and performs at most one dual
//! update per visit, each in `O(size)`, so a full solve is `O(size³)`.

#[cfg(test)]
mod tests;

use munkres_core::{
    Annotations, AssignmentError, CostMatrix, Matching, Potentials, Result, Stage, TraceSink,
    TraceStep,
};
use tracing::trace;

/// Counters reported by [`AugmentingPathMatcher::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatcherCounts {
    pub augmentations: u64,
    pub dual_updates: u64,
    pub columns_visited: u64,
}

/// Final working state of a completed match.
#[derive(Debug, Clone, PartialEq)]
pub struct MatcherOutcome {
    pub potentials: Potentials,
    pub matching: Matching,
    pub counts: MatcherCounts,
}

/// Kuhn-Munkres engine over a padded square cost matrix.
pub struct AugmentingPathMatcher<'a> {
    matrix: &'a CostMatrix,
    tolerance: f64,
    potentials: Potentials,
    matching: Matching,
    counts: MatcherCounts,

    // Per-round scratch, reused across rounds.
    slack: Vec<f64>,
    way: Vec<usize>,
    row_visited: Vec<bool>,
    col_visited: Vec<bool>,
    visited_rows: Vec<usize>,
}

impl<'a> AugmentingPathMatcher<'a> {
    /// Creates a matcher starting from `potentials` and an empty matching.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance` is negative or NaN, if the potentials do not
    /// cover the padded square, or if they are dual infeasible beyond
    /// `tolerance`.
    pub fn new(matrix: &'a CostMatrix, potentials: Potentials, tolerance: f64) -> Self {
        assert!(
            tolerance >= 0.0 && tolerance.is_finite(),
            "tolerance must be finite and non-negative, got {tolerance}"
        );
        let size = matrix.size();
        assert_eq!(
            potentials.size(),
            size,
            "potentials of size {} for a matrix of size {size}",
            potentials.size()
        );
        debug_assert!(
            (0..size).all(|i| (0..size).all(|j| potentials.reduced_cost(matrix, i, j) >= -tolerance)),
            "initial potentials are dual infeasible"
        );

        Self {
            matrix,
            tolerance,
            potentials,
            matching: Matching::new(size, size),
            counts: MatcherCounts::default(),
            slack: vec![f64::INFINITY; size],
            way: vec![0; size],
            row_visited: vec![false; size],
            col_visited: vec![false; size],
            visited_rows: Vec::with_capacity(size),
        }
    }

    /// Current matching.
    pub fn matching(&self) -> &Matching {
        &self.matching
    }

    /// Current potentials.
    pub fn potentials(&self) -> &Potentials {
        &self.potentials
    }

    /// Augments until the matching is perfect.
    ///
    /// # Errors
    ///
    /// [`AssignmentError::NoFeasibleAssignment`] if some free row cannot reach
    /// any free column. A padded square always has a perfect matching, so
    /// this only surfaces a broken cost matrix.
    pub fn run<T: TraceSink>(mut self, sink: &mut T) -> Result<MatcherOutcome> {
        let size = self.matrix.size();

        while let Some(root) = self.matching.first_free_row() {
            self.augment_from(root, sink)?;
            assert!(
                self.matching.len() <= size,
                "matching of {} pairs exceeds size {size}",
                self.matching.len()
            );
        }

        Ok(MatcherOutcome {
            potentials: self.potentials,
            matching: self.matching,
            counts: self.counts,
        })
    }

    /// One round: grows the matching by exactly one pair covering `root`.
    pub fn augment_from<T: TraceSink>(&mut self, root: usize, sink: &mut T) -> Result<()> {
        assert!(self.matching.is_row_free(root), "row {root} is already matched");

        self.slack.fill(f64::INFINITY);
        self.row_visited.fill(false);
        self.col_visited.fill(false);
        self.visited_rows.clear();
        self.visit_row(root);

        loop {
            let mut free_col = None;
            let mut next = None;
            for j in 0..self.matrix.size() {
                if self.col_visited[j] || self.slack[j] > self.tolerance {
                    continue;
                }
                match self.matching.row_of(j) {
                    None => {
                        free_col = Some(j);
                        break;
                    }
                    Some(row) if next.is_none() => next = Some((j, row)),
                    Some(_) => {}
                }
            }

            if let Some(col) = free_col {
                self.flip_path(root, col);
                self.counts.augmentations += 1;
                trace!(
                    event = "augment",
                    row = root as u64,
                    col = col as u64,
                    matched = self.matching.len() as u64,
                );
                sink.record_with(|| self.augmented_step(root));
                return Ok(());
            }

            if let Some((col, row)) = next {
                self.col_visited[col] = true;
                self.counts.columns_visited += 1;
                self.visit_row(row);
                continue;
            }

            let delta = self.dual_update(root)?;
            trace!(
                event = "dual_update",
                row = root as u64,
                delta = delta,
                visited_rows = self.visited_rows.len() as u64,
            );
            sink.record_with(|| self.dual_update_step(delta));
        }
    }

    // Adds `row` to the alternating tree and relaxes slack through it.
    fn visit_row(&mut self, row: usize) {
        self.row_visited[row] = true;
        self.visited_rows.push(row);
        for j in 0..self.matrix.size() {
            if self.col_visited[j] {
                continue;
            }
            let reduced = self.potentials.reduced_cost(self.matrix, row, j);
            if reduced < self.slack[j] {
                self.slack[j] = reduced;
                self.way[j] = row;
            }
        }
    }

    // Moves the potentials by the smallest slack across the frontier.
    fn dual_update(&mut self, root: usize) -> Result<f64> {
        let size = self.matrix.size();
        let delta = (0..size)
            .filter(|&j| !self.col_visited[j])
            .map(|j| self.slack[j])
            .fold(f64::INFINITY, f64::min);

        if !delta.is_finite() {
            return Err(AssignmentError::NoFeasibleAssignment { row: root });
        }

        for &i in &self.visited_rows {
            self.potentials.raise_row(i, delta);
        }
        for j in 0..size {
            if self.col_visited[j] {
                self.potentials.lower_col(j, delta);
            } else {
                self.slack[j] -= delta;
            }
        }
        self.counts.dual_updates += 1;
        Ok(delta)
    }

    // Flips matched and unmatched edges along the path ending at free `col`.
    fn flip_path(&mut self, root: usize, mut col: usize) {
        loop {
            let row = self.way[col];
            let previous = self.matching.col_of(row);
            self.matching.link(row, col);
            if row == root {
                break;
            }
            col = previous.expect("every visited row except the root is matched");
        }
        if cfg!(debug_assertions) {
            self.matching.assert_consistent();
        }
    }

    fn real_pairs(&self) -> Vec<(usize, usize)> {
        self.matching
            .pairs()
            .into_iter()
            .filter(|&(i, j)| !self.matrix.is_padding(i, j))
            .collect()
    }

    fn augmented_step(&self, root: usize) -> TraceStep {
        let annotations = Annotations {
            augmented_row: (root < self.matrix.rows()).then_some(root),
            ..Annotations::default()
        };
        TraceStep::new(Stage::Augmented, self.potentials.reduced_snapshot(self.matrix))
            .with_annotations(annotations)
            .with_matching(self.real_pairs())
    }

    fn dual_update_step(&self, delta: f64) -> TraceStep {
        let mut rows: Vec<usize> = self
            .visited_rows
            .iter()
            .copied()
            .filter(|&i| i < self.matrix.rows())
            .collect();
        rows.sort_unstable();
        let cols = (0..self.matrix.cols())
            .filter(|&j| self.col_visited[j])
            .collect();

        let annotations = Annotations {
            delta: Some(delta),
            visited_rows: Some(rows),
            visited_cols: Some(cols),
            ..Annotations::default()
        };
        TraceStep::new(Stage::DualUpdate, self.potentials.reduced_snapshot(self.matrix))
            .with_annotations(annotations)
            .with_matching(self.real_pairs())
    }
}
