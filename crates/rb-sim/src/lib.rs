//! `rb-sim` — run driver for the rail block simulator.
//!
//! # Event loop
//!
//! ```text
//! build:  Topology::line(blocks), one TrainProcess per spec,
//!         Enter(train) scheduled at each entry delay
//! run:    while an event is due at or before the horizon:
//!   Enter(t)          → route check; request first block (or abort t)
//!   Granted(t, b)     → t occupies b; Arrive(t) scheduled after travel time
//!   Arrive(t)         → release b (hand over to next waiter → Granted),
//!                       append the segment, request the next block
//! ```
//!
//! Block grants are never acted on inside `request`/`release`: they are
//! turned into `Granted` events at the current instant, so a woken train
//! resumes on the next pass of the loop.  Trains still travelling at the
//! horizon are frozen and their unfinished segment is not logged.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `run_batch` runs replications on Rayon's thread pool.  |
//! | `serde`    | Serde derives on scenarios, records, and metrics.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rb_sim::{NoopObserver, Scenario};
//! use rb_train::UniformTravel;
//!
//! let mut sim = Scenario::three_train(42).build(UniformTravel::default())?;
//! sim.run(&mut NoopObserver)?;
//! for record in sim.log() {
//!     println!("{} block {}: {} → {}", record.train, record.block_index, record.start, record.end);
//! }
//! ```

pub mod api;
pub mod builder;
pub mod error;
pub mod event;
pub mod loader;
pub mod observer;
pub mod scenario;
pub mod sim;


pub use api::{fresh_seed, metrics, metrics_seeded, run_batch, run_once, run_once_with, timeline, timeline_seeded};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use event::SimEvent;
pub use loader::{load_trains_csv, load_trains_reader};
pub use observer::{NoopObserver, SimObserver};
pub use scenario::Scenario;
pub use sim::{RunStats, Sim};
