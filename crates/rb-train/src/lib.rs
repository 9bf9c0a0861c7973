//! `rb-train` — everything that belongs to one train.
//!
//! # Crate layout
//!
//! | Module      | Contents                                               |
//! |-------------|--------------------------------------------------------|
//! | [`spec`]    | `TrainSpec` (id, category, priority, speed, entry)     |
//! | [`route`]   | `Route`, `RouteDefect`                                 |
//! | [`travel`]  | `TravelModel` trait, `UniformTravel`, `FixedTravel`    |
//! | [`record`]  | `SegmentRecord`                                        |
//! | [`process`] | `TrainProcess`, `TrainState`, `Arrival`                |
//! | [`error`]   | `TrainError`, `TrainResult<T>`                         |
//!
//! # State machine (summary)
//!
//! ```text
//! Pending ──start──▶ WaitingForBlock(0) ──granted──▶ Occupying(0)
//!                          ▲                              │ arrive
//!                          └──── WaitingForBlock(i+1) ◀───┤
//!                                                         └──▶ Completed
//! ```
//!
//! A `TrainProcess` never touches blocks, the clock, or the log.  Each
//! transition returns what the driver must do next (which block to request,
//! how long to travel, which block to release and the finished segment),
//! and the driver performs it.

pub mod error;
pub mod process;
pub mod record;
pub mod route;
pub mod spec;
pub mod travel;

#[cfg(test)]
mod tests;

pub use error::{TrainError, TrainResult};
pub use process::{Arrival, TrainProcess, TrainState};
pub use record::SegmentRecord;
pub use route::{Route, RouteDefect};
pub use spec::TrainSpec;
pub use travel::{FixedTravel, TravelModel, UniformTravel};
