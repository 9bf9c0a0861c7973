//! Simulation time model.
//!
//! # Design
//!
//! Time is a continuous virtual quantity measured in minutes and held as an
//! `f64` inside [`SimTime`].  The clock is never tied to wall time: it jumps
//! straight from one pending event to the next, as fast as the events can be
//! processed.
//!
//! `SimTime` is totally ordered (via `f64::total_cmp`) so it can key a
//! `BinaryHeap` or `BTreeMap`.  Constructors reject NaN, infinities, and
//! negative values; the raw field is public for pattern matching and tests,
//! and callers that build it directly are expected to uphold the same rule.

use std::cmp::Ordering;
use std::fmt;

use crate::{CoreError, CoreResult};

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute point on the virtual clock, in minutes since run start.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Validate and wrap `minutes`.
    pub fn new(minutes: f64) -> CoreResult<SimTime> {
        if minutes.is_finite() && minutes >= 0.0 {
            Ok(SimTime(minutes))
        } else {
            Err(CoreError::InvalidTime(minutes))
        }
    }

    /// Return the time `delay` minutes after `self`.
    ///
    /// The caller is responsible for `delay` being finite and non-negative;
    /// the scheduler checks this before calling.
    #[inline]
    pub fn after(self, delay: f64) -> SimTime {
        SimTime(self.0 + delay)
    }

    /// Minutes elapsed from `earlier` to `self` (negative if `earlier > self`).
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }

    /// Round to two decimals, the precision used in published timelines.
    #[inline]
    pub fn rounded(self) -> f64 {
        round2(self.0)
    }
}

/// Round `v` to two decimal places.
#[inline]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.2}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level configuration shared by every scenario.
///
/// Topology and the train table live in `rb_sim::Scenario`; this holds only
/// the values the clock and RNG need.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Time at which the run stops advancing.  Events scheduled exactly at
    /// the horizon still fire; later ones never do.
    pub horizon: SimTime,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl SimConfig {
    pub fn new(horizon: SimTime, seed: u64) -> Self {
        Self { horizon, seed }
    }

    /// The time at which the run ends (inclusive upper bound).
    #[inline]
    pub fn end_time(&self) -> SimTime {
        self.horizon
    }
}
