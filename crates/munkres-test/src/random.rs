//! Seeded random matrices.
//!
//! Integer-valued matrices keep every potential update exact in `f64`, so
//! results can be compared with `==`.

use std::ops::Range;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A `rows x cols` matrix of integers drawn from `range`.
pub fn integer_matrix(seed: u64, rows: usize, cols: usize, range: Range<i64>) -> Vec<Vec<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| rng.random_range(range.clone()) as f64)
                .collect()
        })
        .collect()
}

/// A `rows x cols` matrix of reals uniformly drawn from `[low, high)`.
pub fn real_matrix(seed: u64, rows: usize, cols: usize, low: f64, high: f64) -> Vec<Vec<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..rows)
        .map(|_| (0..cols).map(|_| rng.random_range(low..high)).collect())
        .collect()
}

/// Negates every cell.
pub fn negated(raw: &[Vec<f64>]) -> Vec<Vec<f64>> {
    raw.iter()
        .map(|row| row.iter().map(|v| -v).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_reproducible() {
        assert_eq!(integer_matrix(3, 4, 5, 0..10), integer_matrix(3, 4, 5, 0..10));
        assert_ne!(integer_matrix(3, 4, 5, 0..1000), integer_matrix(4, 4, 5, 0..1000));
    }

    #[test]
    fn test_shape_and_range() {
        let raw = integer_matrix(11, 3, 7, -5..5);
        assert_eq!(raw.len(), 3);
        assert!(raw.iter().all(|r| r.len() == 7));
        assert!(raw.iter().flatten().all(|v| (-5.0..5.0).contains(v)));

        let raw = real_matrix(11, 2, 2, 0.0, 1.0);
        assert!(raw.iter().flatten().all(|v| (0.0..1.0).contains(v)));
    }
}
