//! `rb-clock` — virtual clock and event scheduler.
//!
//! # Crate layout
//!
//! | Module        | Contents                                         |
//! |---------------|--------------------------------------------------|
//! | [`scheduler`] | `Scheduler<E>` (`BinaryHeap` keyed by time, seq) |
//! | [`error`]     | `ClockError`, `ClockResult<T>`                   |
//!
//! # Model (summary)
//!
//! The scheduler knows nothing about trains or blocks.  It stores opaque
//! events of type `E`, each stamped with an absolute [`SimTime`] and a
//! registration sequence number:
//!
//! ```text
//! schedule_after(d, e)  → push (now + d, seq++, e)
//! pop_until(h)          → earliest (time, seq) ≤ h; now := time
//! ```
//!
//! Events at the same instant fire in registration order.  Time only moves
//! inside `pop_until`, never while the caller is handling an event, so an
//! event handler that schedules follow-ups does so relative to the instant
//! it is running at.
//!
//! [`SimTime`]: rb_core::SimTime

pub mod error;
pub mod scheduler;


pub use error::{ClockError, ClockResult};
pub use scheduler::Scheduler;
