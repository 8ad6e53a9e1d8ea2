//! Partitioning a diff into index sets for a positional consumer.

use smallvec::SmallVec;

use crate::algo::diff;
use crate::step::DiffResult;

/// Index sets rarely exceed this, so they stay inline.
pub type IndexPaths = SmallVec<[IndexPath; 8]>;

// =============================================================================
// IndexPath
// =============================================================================

/// Position of an item inside one section of a partitioned consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexPath {
    /// Index within the section
    pub item: usize,
    /// Section (partition) the item belongs to
    pub section: usize,
}

impl IndexPath {
    #[inline]
    pub fn new(item: usize, section: usize) -> Self {
        Self { item, section }
    }

    /// Flat position for consumers that treat the section as an offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.section + self.item
    }
}

// =============================================================================
// ChangeBatch
// =============================================================================

/// One batched update: insertions and deletions applied together.
///
/// Deletion items are indices into the previous sequence, insertion items are
/// indices into the next one. Both keep diff order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeBatch {
    pub insertions: IndexPaths,
    pub deletions: IndexPaths,
}

impl ChangeBatch {
    /// Check if neither set has entries
    pub fn is_empty(&self) -> bool {
        self.insertions.is_empty() && self.deletions.is_empty()
    }

    /// Total number of index paths in the batch
    pub fn len(&self) -> usize {
        self.insertions.len() + self.deletions.len()
    }

    /// Flat insertion positions (`section + item`).
    pub fn insertion_positions(&self) -> Vec<usize> {
        self.insertions.iter().map(IndexPath::position).collect()
    }

    /// Flat deletion positions (`section + item`).
    pub fn deletion_positions(&self) -> Vec<usize> {
        self.deletions.iter().map(IndexPath::position).collect()
    }
}

/// Split a diff into insertion and deletion index paths tagged with `section`.
///
/// Returns `None` when the diff is empty, meaning no update is needed.
pub fn partition<T>(result: &DiffResult<T>, section: usize) -> Option<ChangeBatch> {
    if result.is_empty() {
        return None;
    }

    let mut batch = ChangeBatch::default();
    for step in result {
        let path = IndexPath::new(step.index(), section);
        if step.is_insertion() {
            batch.insertions.push(path);
        } else {
            batch.deletions.push(path);
        }
    }
    Some(batch)
}

// =============================================================================
// Dispatch
// =============================================================================

/// What a consumer has to do after the tracked sequence was replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Sequences are equal, leave the consumer alone
    Skip,
    /// Apply this batch in one logical update
    Apply(ChangeBatch),
}

impl Dispatch {
    pub fn is_skip(&self) -> bool {
        matches!(self, Dispatch::Skip)
    }

    pub fn into_batch(self) -> Option<ChangeBatch> {
        match self {
            Dispatch::Skip => None,
            Dispatch::Apply(batch) => Some(batch),
        }
    }
}

/// Transition function for a replaced sequence: diff `previous` against `next`
/// and decide what to dispatch to a consumer showing `section`.
pub fn on_replace<T: PartialEq + Clone>(previous: &[T], next: &[T], section: usize) -> Dispatch {
    match partition(&diff(previous, next), section) {
        Some(batch) => Dispatch::Apply(batch),
        None => Dispatch::Skip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OLD: [i32; 7] = [0, 1, 2, 5, 8, 9, 0];
    const NEW: [i32; 7] = [4, 5, 9, 8, 3, 1, 0];

    fn items(paths: &IndexPaths) -> Vec<usize> {
        paths.iter().map(|p| p.item).collect()
    }

    #[test]
    fn test_partition_default_section() {
        let batch = partition(&diff(&OLD, &NEW), 0).unwrap();
        assert_eq!(items(&batch.deletions), vec![0, 1, 2, 4]);
        assert_eq!(items(&batch.insertions), vec![0, 3, 4, 5]);
        assert!(batch.deletions.iter().all(|p| p.section == 0));
        assert_eq!(batch.len(), 8);
    }

    #[test]
    fn test_partition_with_section_offset() {
        let batch = partition(&diff(&OLD, &NEW), 5).unwrap();
        assert_eq!(batch.deletion_positions(), vec![5, 6, 7, 9]);
        assert_eq!(batch.insertion_positions(), vec![5, 8, 9, 10]);
        // Items stay relative to the section
        assert_eq!(items(&batch.deletions), vec![0, 1, 2, 4]);
        assert!(batch.insertions.iter().all(|p| p.section == 5));
    }

    #[test]
    fn test_partition_empty_is_none() {
        assert!(partition(&DiffResult::<u8>::default(), 3).is_none());
    }

    #[test]
    fn test_partition_inserts_only() {
        let batch = partition(&diff(&[], &[1, 2, 3]), 0).unwrap();
        assert_eq!(items(&batch.insertions), vec![0, 1, 2]);
        assert!(batch.deletions.is_empty());
        assert!(!batch.is_empty());
    }

    #[test]
    fn test_on_replace() {
        assert!(on_replace(&OLD, &OLD, 0).is_skip());

        let dispatch = on_replace(&OLD, &NEW, 2);
        let batch = dispatch.into_batch().unwrap();
        assert_eq!(batch.deletion_positions(), vec![2, 3, 4, 6]);
    }

    #[test]
    fn test_index_path_ordering() {
        let mut paths = vec![IndexPath::new(3, 1), IndexPath::new(0, 2), IndexPath::new(1, 1)];
        paths.sort();
        assert_eq!(paths[0], IndexPath::new(0, 2));
        assert_eq!(paths[2].position(), 4);
    }
}
