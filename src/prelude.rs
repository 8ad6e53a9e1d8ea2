//! Prelude module for common imports.
//!
//! ```
//! use tola_listdiff::prelude::*;
//!
//! assert!(diff(&[1, 2], &[1, 2]).is_empty());
//! ```

// Algorithms
pub use crate::algo::{compute_lcs, diff, diff_all, lcs, reconstruct_diff, ScoreTable};

// Edit scripts
pub use crate::step::{DiffResult, DiffStats, DiffStep};

// Apply
pub use crate::apply::apply_diff;

// Adapter
pub use crate::adapter::{
    on_replace, partition, BatchUpdate, CalculatorConfig, ChangeBatch, DiffCalculator, Dispatch,
    DispatchOutcome, IndexPath, SharedDiffCalculator,
};

// Extension
pub use crate::ext::SliceDiffExt;

// Error
pub use crate::error::{ListDiffError, ListDiffResult};
