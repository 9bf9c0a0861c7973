//! `rb-block` — track blocks as mutual-exclusion resources.
//!
//! # Crate layout
//!
//! | Module        | Contents                                          |
//! |---------------|---------------------------------------------------|
//! | [`admission`] | `AdmissionOrder` (priority comparator)            |
//! | [`resource`]  | `BlockResource`, `Admission`                      |
//! | [`topology`]  | `Topology` (the run's `Vec<BlockResource>`)       |
//! | [`error`]     | `BlockError`, `BlockResult<T>`                    |
//!
//! # Admission model (summary)
//!
//! ```text
//! request(train, p)  free     → owner := train            (Granted)
//!                    occupied → insert into wait list      (Queued)
//! release(train)     owner == train → owner := best waiter (or None)
//!                    otherwise      → InvalidRelease
//! ```
//!
//! The wait list is kept sorted by priority under the block's
//! [`AdmissionOrder`], ties broken by request order.  Release hands the
//! block to the head of the list in the same call, so there is never an
//! instant at which a third requester could slip in between.
//!
//! Blocks do not notify anyone.  The caller (the run driver) turns a grant
//! into an event on the clock, which is how a woken waiter learns about it.

pub mod admission;
pub mod error;
pub mod resource;
pub mod topology;


pub use admission::AdmissionOrder;
pub use error::{BlockError, BlockResult};
pub use resource::{Admission, BlockResource};
pub use topology::Topology;
