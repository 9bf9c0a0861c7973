//! Static description of a train, fixed at scenario setup.

use rb_core::{Priority, TrainCategory, TrainId};

use crate::{Route, TrainError, TrainResult};

/// Everything about a train that is known before the run starts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainSpec {
    pub id:          TrainId,
    /// Display/logging label only.
    pub category:    TrainCategory,
    /// Admission key on contended blocks.
    pub priority:    Priority,
    /// Distance units per minute.  Travel time scales with `1 / speed`.
    pub speed:       f64,
    /// Minutes after run start at which the train first requests a block.
    pub entry_delay: f64,
    pub route:       Route,
}

impl TrainSpec {
    pub fn new(
        id:          TrainId,
        category:    TrainCategory,
        priority:    Priority,
        speed:       f64,
        entry_delay: f64,
        route:       Route,
    ) -> Self {
        Self { id, category, priority, speed, entry_delay, route }
    }

    /// Reject a speed that would make travel time undefined.
    ///
    /// Entry delay is checked by the scheduler when the entry event is
    /// registered, and the route when the train starts.
    pub fn validate(&self) -> TrainResult<()> {
        if self.speed.is_finite() && self.speed > 0.0 {
            Ok(())
        } else {
            Err(TrainError::InvalidSpeed { train: self.id, speed: self.speed })
        }
    }
}
