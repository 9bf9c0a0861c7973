//! `rb-core` — foundational types for the rail block simulator.
//!
//! This crate is a dependency of every other `rb-*` crate.  It has no `rb-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`ids`]       | `TrainId`, `BlockId`, `Priority`                      |
//! | [`time`]      | `SimTime`, `SimConfig`                                |
//! | [`rng`]       | `TrainRng` (per-train), `SimRng` (run-level)          |
//! | [`category`]  | `TrainCategory` enum                                  |
//! | [`error`]     | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod category;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use category::TrainCategory;
pub use error::{CoreError, CoreResult};
pub use ids::{BlockId, Priority, TrainId};
pub use rng::{SimRng, TrainRng};
pub use time::{SimConfig, SimTime};
