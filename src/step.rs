//! Edit script types.
//!
//! A [`DiffResult`] is an ordered list of [`DiffStep`]s. Deletions are indexed
//! into the *old* sequence, insertions into the *new* sequence, so a consumer
//! can apply every deletion first (high to low) and then every insertion
//! (low to high) without index corruption.
//!
//! Steps render in a compact notation: `-3` deletes old index 3, `+0` inserts
//! at new index 0. A whole diff renders as the concatenation, e.g. `-0+0-2+2`.

use std::fmt;

// =============================================================================
// DiffStep
// =============================================================================

/// A single edit operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiffStep<T> {
    /// Insert `value` so that it ends up at `index` in the new sequence
    Insert { index: usize, value: T },
    /// Delete `value` found at `index` in the old sequence
    Delete { index: usize, value: T },
}

impl<T> DiffStep<T> {
    /// Position this step targets (new-index for insertions, old-index for deletions).
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Self::Insert { index, .. } | Self::Delete { index, .. } => *index,
        }
    }

    /// The element being inserted or deleted.
    #[inline]
    pub fn value(&self) -> &T {
        match self {
            Self::Insert { value, .. } | Self::Delete { value, .. } => value,
        }
    }

    #[inline]
    pub fn is_insertion(&self) -> bool {
        matches!(self, Self::Insert { .. })
    }

    #[inline]
    pub fn is_deletion(&self) -> bool {
        matches!(self, Self::Delete { .. })
    }

    /// Consume the step, returning its element.
    pub fn into_value(self) -> T {
        match self {
            Self::Insert { value, .. } | Self::Delete { value, .. } => value,
        }
    }
}

impl<T> fmt::Display for DiffStep<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert { index, .. } => write!(f, "+{index}"),
            Self::Delete { index, .. } => write!(f, "-{index}"),
        }
    }
}

// =============================================================================
// DiffStats
// =============================================================================

/// Step counts of a diff.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DiffStats {
    /// Number of insertions
    pub inserted: usize,
    /// Number of deletions
    pub deleted: usize,
}

impl DiffStats {
    /// Total number of edit operations
    pub fn edit_count(&self) -> usize {
        self.inserted + self.deleted
    }

    /// Check if there are no changes
    pub fn is_empty(&self) -> bool {
        self.edit_count() == 0
    }
}

// =============================================================================
// DiffResult
// =============================================================================

/// Ordered edit script turning one sequence into another.
///
/// An empty result means the sequences are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub struct DiffResult<T> {
    steps: Vec<DiffStep<T>>,
}

impl<T> Default for DiffResult<T> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<T> DiffResult<T> {
    /// Wrap steps that are already in forward order.
    pub fn from_steps(steps: Vec<DiffStep<T>>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[DiffStep<T>] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<DiffStep<T>> {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffStep<T>> {
        self.steps.iter()
    }

    /// Insertion steps, in diff order.
    pub fn insertions(&self) -> impl Iterator<Item = &DiffStep<T>> + '_ {
        self.steps.iter().filter(|s| s.is_insertion())
    }

    /// Deletion steps, in diff order.
    pub fn deletions(&self) -> impl Iterator<Item = &DiffStep<T>> + '_ {
        self.steps.iter().filter(|s| s.is_deletion())
    }

    pub fn stats(&self) -> DiffStats {
        self.steps.iter().fold(DiffStats::default(), |mut stats, step| {
            if step.is_insertion() {
                stats.inserted += 1;
            } else {
                stats.deleted += 1;
            }
            stats
        })
    }
}

impl<T> fmt::Display for DiffResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

impl<T> IntoIterator for DiffResult<T> {
    type Item = DiffStep<T>;
    type IntoIter = std::vec::IntoIter<DiffStep<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DiffResult<T> {
    type Item = &'a DiffStep<T>;
    type IntoIter = std::slice::Iter<'a, DiffStep<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
