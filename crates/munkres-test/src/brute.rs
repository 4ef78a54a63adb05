//! Exhaustive optimum search.
//!
//! Enumerates every injective mapping from the shorter side to the longer
//! one. Only meant for the small shapes used in tests: a 6x6 matrix has 720
//! candidates, a 4x7 matrix 840.

use munkres_core::Objective;

/// Best objective found by exhaustive search, with one pairing achieving it.
#[derive(Debug, Clone, PartialEq)]
pub struct BruteForceOptimum {
    pub total: f64,
    /// `(row, col)` pairs in row order.
    pub pairs: Vec<(usize, usize)>,
}

/// Finds the optimal assignment of `raw` by trying every pairing.
///
/// # Panics
///
/// Panics if `raw` is empty or ragged.
pub fn brute_force(raw: &[Vec<f64>], objective: Objective) -> BruteForceOptimum {
    let rows = raw.len();
    assert!(rows > 0, "brute force needs at least one row");
    let cols = raw[0].len();
    assert!(cols > 0, "brute force needs at least one column");
    assert!(raw.iter().all(|r| r.len() == cols), "ragged matrix");

    let transposed = rows > cols;
    let (short, long) = if transposed { (cols, rows) } else { (rows, cols) };
    let value = |s: usize, l: usize| if transposed { raw[l][s] } else { raw[s][l] };

    let mut search = Search {
        objective,
        used: vec![false; long],
        current: Vec::with_capacity(short),
        best: None,
    };
    search.extend(short, &value, 0.0);

    let (total, choice) = search.best.expect("at least one pairing exists");
    let mut pairs: Vec<(usize, usize)> = choice
        .into_iter()
        .enumerate()
        .map(|(s, l)| if transposed { (l, s) } else { (s, l) })
        .collect();
    pairs.sort_unstable();

    BruteForceOptimum { total, pairs }
}

struct Search {
    objective: Objective,
    used: Vec<bool>,
    current: Vec<usize>,
    best: Option<(f64, Vec<usize>)>,
}

impl Search {
    fn extend<F>(&mut self, short: usize, value: &F, partial: f64)
    where
        F: Fn(usize, usize) -> f64,
    {
        let s = self.current.len();
        if s == short {
            let better = match &self.best {
                None => true,
                Some((best, _)) => self.objective.is_better(partial, *best),
            };
            if better {
                self.best = Some((partial, self.current.clone()));
            }
            return;
        }

        for l in 0..self.used.len() {
            if self.used[l] {
                continue;
            }
            self.used[l] = true;
            self.current.push(l);
            self.extend(short, value, partial + value(s, l));
            self.current.pop();
            self.used[l] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worked_example() {
        let raw = vec![
            vec![1.0, 2.0, 3.0],
            vec![2.0, 4.0, 6.0],
            vec![3.0, 6.0, 9.0],
        ];
        let best = brute_force(&raw, Objective::Minimize);
        assert_eq!(best.total, 10.0);
        assert_eq!(best.pairs, vec![(0, 2), (1, 1), (2, 0)]);

        let best = brute_force(&raw, Objective::Maximize);
        assert_eq!(best.total, 14.0);
    }

    #[test]
    fn test_tall() {
        let raw = vec![vec![5.0], vec![2.0], vec![7.0]];
        let best = brute_force(&raw, Objective::Minimize);
        assert_eq!(best.total, 2.0);
        assert_eq!(best.pairs, vec![(1, 0)]);
    }

    #[test]
    fn test_wide() {
        let raw = vec![vec![5.0, 2.0, 7.0], vec![1.0, 9.0, 8.0]];
        let best = brute_force(&raw, Objective::Maximize);
        assert_eq!(best.total, 16.0);
        assert_eq!(best.pairs, vec![(0, 2), (1, 1)]);
    }
}
