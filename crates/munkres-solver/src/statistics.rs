//! Solve statistics.

use std::time::Duration;

use crate::matcher::MatcherCounts;

/// Work performed by one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStatistics {
    /// Side of the padded square.
    pub size: usize,
    /// Augmenting paths flipped; equals `size` for a completed solve.
    pub augmentations: u64,
    /// Dual updates performed across all rounds.
    pub dual_updates: u64,
    /// Columns added to alternating trees across all rounds.
    pub columns_visited: u64,
    /// Wall time from normalization to assembly.
    pub duration: Duration,
}

impl SolveStatistics {
    pub(crate) fn new(size: usize, counts: MatcherCounts, duration: Duration) -> Self {
        Self {
            size,
            augmentations: counts.augmentations,
            dual_updates: counts.dual_updates,
            columns_visited: counts.columns_visited,
            duration,
        }
    }

    /// Average dual updates per augmentation.
    pub fn updates_per_round(&self) -> f64 {
        if self.augmentations == 0 {
            0.0
        } else {
            self.dual_updates as f64 / self.augmentations as f64
        }
    }
}
