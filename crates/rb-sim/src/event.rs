//! Events carried by the run's scheduler.

use rb_core::{BlockId, TrainId};

/// A resumption point for one train.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimEvent {
    /// The train's entry delay has elapsed.
    Enter(TrainId),
    /// `block` has been granted to `train`.
    Granted { train: TrainId, block: BlockId },
    /// The train's travel timer through its current block expired.
    Arrive(TrainId),
}
