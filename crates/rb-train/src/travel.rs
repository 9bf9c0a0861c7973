//! Travel-time models — how long a train occupies a block.
//!
//! The model is a type parameter of the run driver, so swapping the random
//! model for a fixed one (as the tests do) costs nothing at runtime.

use rb_core::{BlockId, TrainRng};

use crate::TrainSpec;

/// Computes the minutes a train spends traversing one block.
///
/// # Contract
///
/// - Must return a finite, non-negative duration.
/// - Must be deterministic given the same `rng` state.
/// - Must draw only from `rng`, never from ambient randomness.
pub trait TravelModel: Send + Sync {
    fn travel_time(&self, spec: &TrainSpec, block: BlockId, rng: &mut TrainRng) -> f64;
}

// ── UniformTravel ─────────────────────────────────────────────────────────────

/// `U(low, high) * base_distance / speed`.
///
/// With the defaults (2, 4, 60) a train at speed 60 spends 2–4 minutes per
/// block, one at speed 40 spends 3–6.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformTravel {
    pub low:           f64,
    pub high:          f64,
    pub base_distance: f64,
}

impl Default for UniformTravel {
    fn default() -> Self {
        Self { low: 2.0, high: 4.0, base_distance: 60.0 }
    }
}

impl TravelModel for UniformTravel {
    fn travel_time(&self, spec: &TrainSpec, _block: BlockId, rng: &mut TrainRng) -> f64 {
        let multiplier = if self.high > self.low {
            rng.gen_range(self.low..self.high)
        } else {
            self.low
        };
        multiplier * (self.base_distance / spec.speed)
    }
}

// ── FixedTravel ───────────────────────────────────────────────────────────────

/// Every block takes exactly the given number of minutes, whatever the speed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedTravel(pub f64);

impl TravelModel for FixedTravel {
    #[inline]
    fn travel_time(&self, _spec: &TrainSpec, _block: BlockId, _rng: &mut TrainRng) -> f64 {
        self.0
    }
}
