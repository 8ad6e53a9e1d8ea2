//! Diff reconstruction
//!
//! Turns a filled [`ScoreTable`] into an ordered edit script. Every move of the
//! backward walk that leaves the LCS becomes a step: a move up deletes
//! `old[i-1]` (indexed in the old sequence), a move left inserts `new[j-1]`
//! (indexed in the new sequence). The backward list is reversed so the result
//! reads in ascending order.
//!
//! # Guarantees
//!
//! - `deletions == old.len() - lcs.len()`
//! - `insertions == new.len() - lcs.len()`
//! - deleting by old index (high to low) then inserting by new index
//!   (low to high) turns `old` into `new`

use crate::step::{DiffResult, DiffStep};

use super::lcs::{Backtrack, Move, ScoreTable};

/// Compute the edit script turning `old` into `new`.
pub fn diff<T: PartialEq + Clone>(old: &[T], new: &[T]) -> DiffResult<T> {
    // Quick path: nothing to walk when both sides are identical
    if old == new {
        return DiffResult::default();
    }

    let table = ScoreTable::build(old, new);
    reconstruct_diff(old, new, &table)
}

/// Rebuild the edit script from a table produced by [`ScoreTable::build`] for
/// the same `old` and `new`.
///
/// # Panics
///
/// Panics if the table dimensions don't match the sequences.
pub fn reconstruct_diff<T: Clone>(old: &[T], new: &[T], table: &ScoreTable) -> DiffResult<T> {
    assert!(
        table.rows() == old.len() + 1 && table.cols() == new.len() + 1,
        "score table {}x{} does not match sequences of length {} and {}",
        table.rows(),
        table.cols(),
        old.len(),
        new.len(),
    );

    let mut steps: Vec<DiffStep<T>> = Backtrack::new(table)
        .filter_map(|m| match m {
            Move::Keep { .. } => None,
            Move::Insert { new_idx } => Some(DiffStep::Insert {
                index: new_idx,
                value: new[new_idx].clone(),
            }),
            Move::Delete { old_idx } => Some(DiffStep::Delete {
                index: old_idx,
                value: old[old_idx].clone(),
            }),
        })
        .collect();
    steps.reverse();

    DiffResult::from_steps(steps)
}

// =============================================================================
// Tests
// =============================================================================
