//! Method-style access to the diff algorithms on slices.

use crate::algo;
use crate::step::DiffResult;

/// Extension trait adding `diff` and `lcs` to slices (and, via deref, `Vec`s).
///
/// ```
/// use tola_listdiff::SliceDiffExt;
///
/// let old: Vec<char> = "BANANA".chars().collect();
/// let new: Vec<char> = "KATANA".chars().collect();
/// assert_eq!(old.diff(&new).to_string(), "-0+0-2+2");
/// assert_eq!(old.lcs(&new), "AANA".chars().collect::<Vec<_>>());
/// ```
pub trait SliceDiffExt<T> {
    /// Edit script turning `self` into `new`.
    fn diff(&self, new: &[T]) -> DiffResult<T>;

    /// Longest common subsequence of `self` and `new`.
    fn lcs(&self, new: &[T]) -> Vec<T>;
}

impl<T: PartialEq + Clone> SliceDiffExt<T> for [T] {
    fn diff(&self, new: &[T]) -> DiffResult<T> {
        algo::diff(self, new)
    }

    fn lcs(&self, new: &[T]) -> Vec<T> {
        algo::lcs(self, new)
    }
}
