//! Error types for tola-listdiff.
//!
//! Diffing itself never fails. These errors come from applying an edit script
//! to a sequence it was not computed from.

use thiserror::Error;

/// Errors that can occur when applying a diff.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListDiffError {
    /// A deletion points past the end of the sequence
    #[error("delete index {index} out of bounds for sequence of length {len}")]
    DeleteOutOfBounds {
        /// Old-sequence index of the deletion
        index: usize,
        /// Length of the sequence at that point
        len: usize,
    },

    /// An insertion points past the end of the sequence being rebuilt
    #[error("insert index {index} out of bounds for sequence of length {len}")]
    InsertOutOfBounds {
        /// New-sequence index of the insertion
        index: usize,
        /// Length of the sequence at that point
        len: usize,
    },

    /// The element at a deletion index is not the one the diff recorded
    #[error("stale delete at index {index}: element differs from the diffed sequence")]
    StaleDelete {
        /// Old-sequence index of the deletion
        index: usize,
    },
}

/// Result type alias for list diff operations.
pub type ListDiffResult<T> = Result<T, ListDiffError>;
