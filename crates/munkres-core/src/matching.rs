//! Partial one-to-one matching between rows and columns.

/// Partial injective row/column mapping with its inverse.
///
/// Free rows and columns are `None`. Both directions are kept in sync by
/// [`link`](Self::link); during an augmentation the two maps are briefly
/// inconsistent, and [`assert_consistent`](Self::assert_consistent) is called
/// once the path has been flipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    row_to_col: Vec<Option<usize>>,
    col_to_row: Vec<Option<usize>>,
}

impl Matching {
    /// Creates an empty matching over `rows x cols`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            row_to_col: vec![None; rows],
            col_to_row: vec![None; cols],
        }
    }

    #[inline]
    pub fn col_of(&self, row: usize) -> Option<usize> {
        self.row_to_col[row]
    }

    #[inline]
    pub fn row_of(&self, col: usize) -> Option<usize> {
        self.col_to_row[col]
    }

    #[inline]
    pub fn is_row_free(&self, row: usize) -> bool {
        self.row_to_col[row].is_none()
    }

    #[inline]
    pub fn is_col_free(&self, col: usize) -> bool {
        self.col_to_row[col].is_none()
    }

    /// Lowest-indexed unmatched row.
    pub fn first_free_row(&self) -> Option<usize> {
        self.row_to_col.iter().position(Option::is_none)
    }

    /// Number of matched pairs.
    pub fn len(&self) -> usize {
        self.row_to_col.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.row_to_col.iter().all(Option::is_none)
    }

    /// Returns true if every row and every column is matched.
    pub fn is_perfect(&self) -> bool {
        self.row_to_col.iter().all(Option::is_some) && self.col_to_row.iter().all(Option::is_some)
    }

    /// Matched pairs in row order.
    pub fn pairs(&self) -> Vec<(usize, usize)> {
        self.row_to_col
            .iter()
            .enumerate()
            .filter_map(|(row, col)| col.map(|c| (row, c)))
            .collect()
    }

    /// Points `row` and `col` at each other, leaving their previous partners
    /// dangling until the caller relinks them.
    #[inline]
    pub fn link(&mut self, row: usize, col: usize) {
        self.row_to_col[row] = Some(col);
        self.col_to_row[col] = Some(row);
    }

    /// Panics if the two directions disagree.
    pub fn assert_consistent(&self) {
        for (row, col) in self.row_to_col.iter().enumerate() {
            if let Some(col) = *col {
                assert_eq!(
                    self.col_to_row[col],
                    Some(row),
                    "row {row} maps to column {col} but the inverse does not"
                );
            }
        }
        for (col, row) in self.col_to_row.iter().enumerate() {
            if let Some(row) = *row {
                assert_eq!(
                    self.row_to_col[row],
                    Some(col),
                    "column {col} maps to row {row} but the inverse does not"
                );
            }
        }
    }
}
