//! `rb-output` — timeline and metrics writers for the rail block simulator.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                   |
//! |-----------|---------|---------------------------------|
//! | *(none)*  | CSV     | `timeline.csv`, `metrics.csv`   |
//! | `sqlite`  | SQLite  | `output.db`                     |
//!
//! Both backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `rb_sim::SimObserver`.  Times are
//! rounded to two decimals on the way out; the in-memory log keeps full
//! precision.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rb_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{MetricsRow, SegmentRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
