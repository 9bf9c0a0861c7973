//! Run observer trait for progress reporting and data collection.

use rb_core::{BlockId, SimConfig, SimTime, TrainId};
use rb_train::{SegmentRecord, TrainError};

use crate::RunStats;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] as the run unfolds.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers see the run; they cannot
/// change it.
///
/// # Example — segment printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_segment(&mut self, r: &SegmentRecord) {
///         println!("{} block {} {}→{}", r.train, r.block_index, r.start, r.end);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first event fires.
    fn on_run_start(&mut self, _config: &SimConfig, _trains: usize) {}

    /// Called when `train` begins occupying `block`.
    fn on_grant(&mut self, _now: SimTime, _train: TrainId, _block: BlockId) {}

    /// Called each time a segment is appended to the log.
    fn on_segment(&mut self, _record: &SegmentRecord) {}

    /// Called when a train is dropped from the run at startup.
    fn on_train_aborted(&mut self, _now: SimTime, _error: &TrainError) {}

    /// Called once after the clock reaches the horizon.
    fn on_run_end(&mut self, _stats: &RunStats) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
