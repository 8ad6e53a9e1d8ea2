//! Change application adapter.
//!
//! Bridges the diff algorithm to an external positional consumer:
//!
//! ```text
//! set_items(next) -> diff(previous, next) -> partition(section) -> apply_batch(ins, del)
//! ```
//!
//! - `change`: index paths, batches and the pure `on_replace` transition
//! - `calculator`: tracks the current sequence, holds the consumer weakly
//! - `shared`: lock-serialized calculator for multi-threaded owners

mod calculator;
mod change;
mod shared;

pub use calculator::{BatchUpdate, CalculatorConfig, DiffCalculator, DispatchOutcome};
pub use change::{on_replace, partition, ChangeBatch, Dispatch, IndexPath, IndexPaths};
pub use shared::SharedDiffCalculator;
