//! tola-listdiff - LCS-based list diffing for positional consumers
//!
//! ## Core Concepts
//!
//! **Edit scripts over indices**: `diff(old, new)` returns insert/delete steps
//! addressed by position. Deletions index the old sequence, insertions the new
//! one, so a consumer can delete high-to-low and then insert low-to-high
//! without index corruption. Moves are a delete plus an insert.
//!
//! **Fixed tie-break**: when several longest common subsequences exist, the
//! backtracking walk always picks the same one, so identical inputs produce
//! identical scripts.
//!
//! ## Modules
//! - `algo`: LCS score table, diff reconstruction, batch diffing
//! - `step`: `DiffStep` / `DiffResult` types
//! - `apply`: replay a diff onto a sequence
//! - `adapter`: partition diffs into index sets and drive a batch-update consumer
//! - `ext`: `.diff()` / `.lcs()` on slices
//!
//! ## Usage
//!
//! ```
//! use tola_listdiff::{apply_diff, diff};
//!
//! let old = vec![0, 1, 2, 5, 8, 9, 0];
//! let new = vec![4, 5, 9, 8, 3, 1, 0];
//!
//! let result = diff(&old, &new);
//! assert_eq!(result.to_string(), "-0-1-2+0-4+3+4+5");
//! assert_eq!(apply_diff(&old, &result).unwrap(), new);
//! ```

/// Algorithms: LCS, reconstruction, batch
pub mod algo;

/// Edit script types
pub mod step;

/// Replaying edit scripts
pub mod apply;

/// Change application adapter for positional consumers
pub mod adapter;

/// Slice extension trait
pub mod ext;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Algorithms
pub use algo::{compute_lcs, diff, diff_all, lcs, reconstruct_diff, ScoreTable};

// Edit scripts
pub use step::{DiffResult, DiffStats, DiffStep};

// Apply
pub use apply::apply_diff;

// Adapter
pub use adapter::{
    on_replace, partition, BatchUpdate, CalculatorConfig, ChangeBatch, DiffCalculator, Dispatch,
    DispatchOutcome, IndexPath, SharedDiffCalculator,
};

// Extension
pub use ext::SliceDiffExt;

// Error types
pub use error::{ListDiffError, ListDiffResult};

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::assert_impl_all!(DiffResult<u32>: Send, Sync, Clone);
    static_assertions::assert_impl_all!(ScoreTable: Send, Sync);
    static_assertions::assert_impl_all!(ChangeBatch: Send, Sync);

    #[test]
    fn test_end_to_end_with_section() {
        let old: Vec<char> = "BANANA".chars().collect();
        let new: Vec<char> = "KATANA".chars().collect();

        let (common, table) = compute_lcs(&old, &new);
        assert_eq!(common.iter().collect::<String>(), "AANA");

        let result = reconstruct_diff(&old, &new, &table);
        assert_eq!(result, diff(&old, &new));

        let batch = partition(&result, 1).unwrap();
        assert_eq!(batch.deletion_positions(), vec![1, 3]);
        assert_eq!(batch.insertion_positions(), vec![1, 3]);

        assert_eq!(apply_diff(&old, &result).unwrap(), new);
    }

    #[test]
    fn test_diff_is_usable_across_threads() {
        let handles: Vec<_> = (0..4usize)
            .map(|n| {
                std::thread::spawn(move || {
                    let old: Vec<usize> = (0..20).collect();
                    let new: Vec<usize> = (n..20 + n).collect();
                    diff(&old, &new).stats()
                })
            })
            .collect();

        for (n, handle) in handles.into_iter().enumerate() {
            let stats = handle.join().unwrap();
            assert_eq!(stats.deleted, n);
            assert_eq!(stats.inserted, n);
        }
    }
}
