//! Algorithm implementations for list diffing.
//!
//! - `lcs`: score table and longest common subsequence
//! - `reconstruct`: edit script from the score table
//! - `batch`: many independent diffs, optionally in parallel

mod batch;
mod lcs;
mod reconstruct;

pub use batch::diff_all;
pub use lcs::{compute_lcs, lcs, ScoreTable};
pub use reconstruct::{diff, reconstruct_diff};
