//! Longest Common Subsequence (LCS) engine
//!
//! Builds the dynamic-programming score table for two sequences and walks it
//! backward to recover the common subsequence.
//!
//! # Recurrence
//!
//! ```text
//! table[0][*] = table[*][0] = 0
//! table[i][j] = table[i-1][j-1] + 1              if old[i-1] == new[j-1]
//!             = max(table[i-1][j], table[i][j-1]) otherwise
//! ```
//!
//! # Backtracking order
//!
//! The walk from `(|old|, |new|)` to `(0, 0)` is fixed, because it decides which
//! of several equally long subsequences is chosen (and therefore which edit
//! script the reconstructor emits). At each cell:
//!
//! 1. on the top edge consume `new` (left), on the left edge consume `old` (up)
//! 2. if the left neighbour keeps the score, move left
//! 3. else if the upper neighbour keeps the score, move up
//! 4. else the elements match, move diagonally
//!
//! The LCS engine and the diff reconstructor share this walk, so the returned
//! subsequence is exactly the set of elements the diff keeps.
//!
//! # Complexity
//!
//! - Time: O(n * m)
//! - Space: O(n * m) for the table

/// Score table: `get(i, j)` is the LCS length of `old[..i]` and `new[..j]`.
///
/// Stored as a flat row-major buffer of `(n + 1) * (m + 1)` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    cells: Vec<usize>,
    rows: usize,
    cols: usize,
}

impl ScoreTable {
    /// Fill the table for `old` (rows) against `new` (columns).
    pub fn build<T: PartialEq>(old: &[T], new: &[T]) -> Self {
        let rows = old.len() + 1;
        let cols = new.len() + 1;
        log::trace!("building lcs table {rows}x{cols}");

        let mut cells = vec![0usize; rows * cols];

        for i in 1..rows {
            for j in 1..cols {
                cells[i * cols + j] = if old[i - 1] == new[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
            }
        }

        Self { cells, rows, cols }
    }

    /// Score at cell `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) outside {}x{} table", self.rows, self.cols);
        self.cells[i * self.cols + j]
    }

    /// `old.len() + 1`
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// `new.len() + 1`
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Length of the LCS of the full sequences.
    #[inline]
    pub fn lcs_len(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }
}

// =============================================================================
// Backtracking walk
// =============================================================================

/// One move of the backward walk through a [`ScoreTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Move {
    /// `old[old_idx] == new[new_idx]` is part of the LCS
    Keep { old_idx: usize, new_idx: usize },
    /// `new[new_idx]` is not in the LCS
    Insert { new_idx: usize },
    /// `old[old_idx]` is not in the LCS
    Delete { old_idx: usize },
}

/// Iterator over the backward walk, from the bottom-right cell to `(0, 0)`.
pub(crate) struct Backtrack<'a> {
    table: &'a ScoreTable,
    i: usize,
    j: usize,
}

impl<'a> Backtrack<'a> {
    pub(crate) fn new(table: &'a ScoreTable) -> Self {
        Self {
            table,
            i: table.rows - 1,
            j: table.cols - 1,
        }
    }
}

impl Iterator for Backtrack<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        let (i, j) = (self.i, self.j);
        let t = self.table;

        let step = match (i, j) {
            (0, 0) => return None,
            (0, _) => Move::Insert { new_idx: j - 1 },
            (_, 0) => Move::Delete { old_idx: i - 1 },
            _ if t.get(i, j) == t.get(i, j - 1) => Move::Insert { new_idx: j - 1 },
            _ if t.get(i, j) == t.get(i - 1, j) => Move::Delete { old_idx: i - 1 },
            _ => Move::Keep { old_idx: i - 1, new_idx: j - 1 },
        };

        match step {
            Move::Insert { .. } => self.j -= 1,
            Move::Delete { .. } => self.i -= 1,
            Move::Keep { .. } => {
                self.i -= 1;
                self.j -= 1;
            }
        }

        Some(step)
    }
}

// =============================================================================
// Public API
// =============================================================================

/// Compute the LCS of two sequences together with the score table behind it.
///
/// The table can be handed to [`reconstruct_diff`](super::reconstruct_diff)
/// to produce the matching edit script without recomputing it.
pub fn compute_lcs<T: PartialEq + Clone>(old: &[T], new: &[T]) -> (Vec<T>, ScoreTable) {
    let table = ScoreTable::build(old, new);
    let lcs = lcs_from_table(old, new, &table);
    (lcs, table)
}

/// Longest common subsequence of `old` and `new`.
pub fn lcs<T: PartialEq + Clone>(old: &[T], new: &[T]) -> Vec<T> {
    compute_lcs(old, new).0
}

pub(crate) fn lcs_from_table<T: Clone>(old: &[T], new: &[T], table: &ScoreTable) -> Vec<T> {
    debug_assert_eq!(table.rows(), old.len() + 1);
    debug_assert_eq!(table.cols(), new.len() + 1);

    let mut lcs: Vec<T> = Backtrack::new(table)
        .filter_map(|m| match m {
            Move::Keep { old_idx, new_idx } => {
                debug_assert!(new_idx < new.len());
                Some(old[old_idx].clone())
            }
            _ => None,
        })
        .collect();
    lcs.reverse();
    lcs
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn lcs_str(a: &str, b: &str) -> String {
        lcs(&chars(a), &chars(b)).into_iter().collect()
    }

    #[test]
    fn test_table_dimensions() {
        let table = ScoreTable::build(&[1, 2, 3], &[2, 3]);
        assert_eq!(table.rows(), 4);
        assert_eq!(table.cols(), 3);
        assert_eq!(table.lcs_len(), 2);
    }

    #[test]
    fn test_table_base_cases_are_zero() {
        let table = ScoreTable::build(&chars("abc"), &chars("abc"));
        for k in 0..4 {
            assert_eq!(table.get(0, k), 0);
            assert_eq!(table.get(k, 0), 0);
        }
        assert_eq!(table.get(3, 3), 3);
    }

    #[test]
    fn test_table_recurrence() {
        // old = "AB", new = "BA"
        let table = ScoreTable::build(&chars("AB"), &chars("BA"));
        assert_eq!(table.get(1, 1), 0); // A vs B
        assert_eq!(table.get(1, 2), 1); // A vs BA
        assert_eq!(table.get(2, 1), 1); // AB vs B
        assert_eq!(table.get(2, 2), 1);
    }

    #[test]
    fn test_empty_tables() {
        let table = ScoreTable::build::<u8>(&[], &[]);
        assert_eq!(table.rows(), 1);
        assert_eq!(table.cols(), 1);
        assert_eq!(table.lcs_len(), 0);

        assert!(lcs::<u8>(&[], &[1, 2]).is_empty());
        assert!(lcs::<u8>(&[1, 2], &[]).is_empty());
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_get_out_of_range_panics() {
        let table = ScoreTable::build(&[1], &[1]);
        table.get(2, 0);
    }

    #[test]
    fn test_reference_subsequences() {
        assert_eq!(lcs_str("1234", "23"), "23");
        assert_eq!(lcs_str("0125890", "4598310"), "590");
        assert_eq!(lcs_str("BANANA", "KATANA"), "AANA");
        assert_eq!(lcs_str("1234", "1224533324"), "1234");
        assert_eq!(lcs_str("thisisatest", "testing123testing"), "tsitest");
        assert_eq!(lcs_str("HUMAN", "CHIMPANZEE"), "HMAN");
    }

    #[test]
    fn test_tie_break_prefers_consuming_new() {
        // Both "A" and "B" are valid. Moving left first skips new[1] = 'A'.
        assert_eq!(lcs_str("AB", "BA"), "B");
    }

    #[test]
    fn test_compute_lcs_returns_matching_table() {
        let old = vec![0, 1, 2, 5, 8, 9, 0];
        let new = vec![4, 5, 9, 8, 3, 1, 0];
        let (lcs, table) = compute_lcs(&old, &new);
        assert_eq!(lcs.len(), table.lcs_len());
        assert_eq!(lcs, vec![5, 9, 0]);
    }

    #[test]
    fn test_backtrack_visits_every_element_once() {
        let old = chars("thisisatest");
        let new = chars("testing123testing");
        let table = ScoreTable::build(&old, &new);

        let (mut olds, mut news) = (0, 0);
        for m in Backtrack::new(&table) {
            match m {
                Move::Keep { .. } => {
                    olds += 1;
                    news += 1;
                }
                Move::Insert { .. } => news += 1,
                Move::Delete { .. } => olds += 1,
            }
        }
        assert_eq!(olds, old.len());
        assert_eq!(news, new.len());
    }
}
