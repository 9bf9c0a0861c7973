//! Deterministic per-train and run-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each train gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (train_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive train IDs uniformly across the seed space.
//! This means:
//!
//! - Trains never share RNG state, so the order in which the event loop
//!   interleaves them cannot change any train's draws.
//! - Adding a train to a scenario does not disturb the travel times of the
//!   trains already in it.
//! - Replaying a run with the same seed reproduces the same log exactly.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::TrainId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── TrainRng ──────────────────────────────────────────────────────────────────

/// Per-train deterministic RNG, owned by the train's process.
pub struct TrainRng(SmallRng);

impl TrainRng {
    /// Seed deterministically from the run's global seed and a train ID.
    pub fn new(global_seed: u64, train: TrainId) -> Self {
        let seed = global_seed ^ (train.0 as u64).wrapping_mul(MIXING_CONSTANT);
        TrainRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Run-level RNG for draws that belong to no particular train (presentation
/// placeholders, replication seeds).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from operating-system entropy.  Runs built this way are not
    /// reproducible; use [`SimRng::new`] whenever a replay matters.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
