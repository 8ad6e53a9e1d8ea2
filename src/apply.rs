//! Applying an edit script to a sequence.
//!
//! Deletions carry old-sequence indices and insertions carry new-sequence
//! indices, so the script is applied in two passes: every deletion from the
//! highest index down, then every insertion from the lowest index up. This is
//! the same order a positional consumer (list view, replicated log) must use.

use crate::error::{ListDiffError, ListDiffResult};
use crate::step::{DiffResult, DiffStep};

/// Apply `diff` to `old`, returning the rebuilt sequence.
///
/// For a diff computed from `old` this always succeeds and yields the diff's
/// target sequence.
pub fn apply_diff<T: PartialEq + Clone>(old: &[T], diff: &DiffResult<T>) -> ListDiffResult<Vec<T>> {
    let mut out = old.to_vec();

    let mut deletions: Vec<(usize, &T)> = diff
        .deletions()
        .map(|s| (s.index(), s.value()))
        .collect();
    deletions.sort_unstable_by(|a, b| b.0.cmp(&a.0));

    for (index, value) in deletions {
        let current = out
            .get(index)
            .ok_or(ListDiffError::DeleteOutOfBounds { index, len: out.len() })?;
        if current != value {
            return Err(ListDiffError::StaleDelete { index });
        }
        out.remove(index);
    }

    let mut insertions: Vec<&DiffStep<T>> = diff.insertions().collect();
    insertions.sort_by_key(|s| s.index());

    for step in insertions {
        let index = step.index();
        if index > out.len() {
            return Err(ListDiffError::InsertOutOfBounds { index, len: out.len() });
        }
        out.insert(index, step.value().clone());
    }

    Ok(out)
}
