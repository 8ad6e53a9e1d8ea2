//! Thread-safe wrapper around [`DiffCalculator`].
//!
//! Replacements are serialized through one lock, so batches reach the consumer
//! in assignment order even when several threads assign.

use std::sync::Arc;

use parking_lot::Mutex;

use super::calculator::{BatchUpdate, DiffCalculator, DispatchOutcome};

/// Shared, serialized diff calculator.
///
/// Uses `parking_lot::Mutex`; the diff and the consumer call both run under
/// the lock.
#[derive(Debug)]
pub struct SharedDiffCalculator<T, C: ?Sized> {
    inner: Arc<Mutex<DiffCalculator<T, C>>>,
}

impl<T, C: ?Sized> Clone for SharedDiffCalculator<T, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, C> SharedDiffCalculator<T, C>
where
    T: PartialEq + Clone,
    C: BatchUpdate + ?Sized,
{
    pub fn new(calculator: DiffCalculator<T, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(calculator)),
        }
    }

    /// Replace the tracked sequence; see [`DiffCalculator::set_items`].
    pub fn set_items(&self, next: Vec<T>) -> DispatchOutcome {
        self.inner.lock().set_items(next)
    }

    /// Execute a closure with access to the calculator.
    pub fn with_read<R>(&self, f: impl FnOnce(&DiffCalculator<T, C>) -> R) -> R {
        let guard = self.inner.lock();
        f(&guard)
    }

    /// Execute a closure with mutable access to the calculator.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut DiffCalculator<T, C>) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Clone of the tracked sequence.
    pub fn items(&self) -> Vec<T> {
        self.with_read(|c| c.items().to_vec())
    }

    pub fn section(&self) -> usize {
        self.with_read(|c| c.section())
    }
}
