//! Sequence-tracking calculator that drives a batch-update consumer.

use std::sync::{Arc, Weak};

use crate::adapter::change::{on_replace, ChangeBatch, Dispatch, IndexPath};

// =============================================================================
// Consumer seam
// =============================================================================

/// A positionally indexed consumer (list view, replicated log, ...).
///
/// Both sets arrive together and must be applied as one logical update.
/// Deletion paths index the previous sequence, insertion paths the next one.
/// Takes `&self`: the calculator only holds a weak handle, so consumers with
/// state use interior mutability.
pub trait BatchUpdate {
    fn apply_batch(&self, insertions: &[IndexPath], deletions: &[IndexPath]);
}

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for a [`DiffCalculator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Section every emitted index path is tagged with.
    /// Default: 0
    pub section: usize,
}

impl CalculatorConfig {
    /// Config targeting one section of a multi-section consumer.
    pub fn section(section: usize) -> Self {
        Self { section }
    }
}

// =============================================================================
// DispatchOutcome
// =============================================================================

/// What happened when the tracked sequence was replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Old and new sequences are equal; the consumer was not called
    Unchanged,
    /// The consumer received this batch
    Dispatched(ChangeBatch),
    /// The consumer is gone (or was never attached); the batch was dropped
    ConsumerGone(ChangeBatch),
}

impl DispatchOutcome {
    /// The computed batch, whether or not it reached a consumer.
    pub fn batch(&self) -> Option<&ChangeBatch> {
        match self {
            Self::Unchanged => None,
            Self::Dispatched(batch) | Self::ConsumerGone(batch) => Some(batch),
        }
    }

    pub fn was_dispatched(&self) -> bool {
        matches!(self, Self::Dispatched(_))
    }
}

// =============================================================================
// DiffCalculator
// =============================================================================

/// Tracks a "current" sequence and forwards the diff of every replacement to
/// a consumer as one batched update.
///
/// The consumer is held weakly. Once it is dropped, updates are computed and
/// silently discarded. Assignments must be serialized by the owner; use
/// [`SharedDiffCalculator`](super::SharedDiffCalculator) to share across threads.
///
/// ```
/// use std::cell::RefCell;
/// use std::sync::Arc;
/// use tola_listdiff::adapter::{BatchUpdate, DiffCalculator, IndexPath};
///
/// #[derive(Default)]
/// struct Log(RefCell<Vec<(usize, usize)>>);
///
/// impl BatchUpdate for Log {
///     fn apply_batch(&self, ins: &[IndexPath], del: &[IndexPath]) {
///         self.0.borrow_mut().push((ins.len(), del.len()));
///     }
/// }
///
/// let view = Arc::new(Log::default());
/// let mut calc = DiffCalculator::new(&view, vec!['a', 'b']);
/// calc.set_items(vec!['b', 'c']);
/// assert_eq!(*view.0.borrow(), vec![(1, 1)]);
/// ```
#[derive(Debug)]
pub struct DiffCalculator<T, C: ?Sized> {
    items: Vec<T>,
    section: usize,
    consumer: Option<Weak<C>>,
}

impl<T, C> DiffCalculator<T, C>
where
    T: PartialEq + Clone,
    C: BatchUpdate + ?Sized,
{
    /// Track `initial` and report changes to `consumer`.
    pub fn new(consumer: &Arc<C>, initial: Vec<T>) -> Self {
        Self::with_config(Some(consumer), initial, CalculatorConfig::default())
    }

    /// Track `initial` without a consumer.
    pub fn detached(initial: Vec<T>) -> Self {
        Self::with_config(None, initial, CalculatorConfig::default())
    }

    pub fn with_config(consumer: Option<&Arc<C>>, initial: Vec<T>, config: CalculatorConfig) -> Self {
        Self {
            items: initial,
            section: config.section,
            consumer: consumer.map(Arc::downgrade),
        }
    }

    /// The currently tracked sequence.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn section(&self) -> usize {
        self.section
    }

    /// Retarget later updates to another section. Does not dispatch.
    pub fn set_section(&mut self, section: usize) {
        self.section = section;
    }

    pub fn attach(&mut self, consumer: &Arc<C>) {
        self.consumer = Some(Arc::downgrade(consumer));
    }

    pub fn detach(&mut self) {
        self.consumer = None;
    }

    /// Check if a live consumer is attached.
    pub fn is_attached(&self) -> bool {
        self.consumer.as_ref().is_some_and(|w| w.strong_count() > 0)
    }

    /// Replace the tracked sequence and dispatch the resulting batch.
    ///
    /// The consumer is called at most once, and only when the batch is
    /// non-empty.
    pub fn set_items(&mut self, next: Vec<T>) -> DispatchOutcome {
        let dispatch = on_replace(&self.items, &next, self.section);
        self.items = next;

        let batch = match dispatch {
            Dispatch::Skip => {
                log::debug!("section {}: no changes, skipping dispatch", self.section);
                return DispatchOutcome::Unchanged;
            }
            Dispatch::Apply(batch) => batch,
        };

        match self.consumer.as_ref().and_then(Weak::upgrade) {
            Some(consumer) => {
                log::debug!(
                    "section {}: dispatching {} insertions, {} deletions",
                    self.section,
                    batch.insertions.len(),
                    batch.deletions.len(),
                );
                consumer.apply_batch(&batch.insertions, &batch.deletions);
                DispatchOutcome::Dispatched(batch)
            }
            None => {
                log::debug!("section {}: consumer unavailable, dropping batch", self.section);
                DispatchOutcome::ConsumerGone(batch)
            }
        }
    }

    /// Stop tracking and return the current sequence.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
