//! `rb-metrics` — reduce a segment log to summary figures.
//!
//! | Module           | Contents                                        |
//! |------------------|-------------------------------------------------|
//! | [`summary`]      | `summarize`, `Metrics`                          |
//! | [`presentation`] | `Presentation` (dashboard placeholder figures)  |
//! | [`report`]       | `MetricsReport` (both of the above)             |
//!
//! Only [`Metrics`] carries guarantees: `active_trains` is the number of
//! distinct trains in the log and `avg_delay` is the mean per-train occupied
//! time, rounded to two decimals (zero for an empty log).  The
//! [`Presentation`] figures exist for dashboards and obey no invariant.

pub mod presentation;
pub mod report;
pub mod summary;


pub use presentation::Presentation;
pub use report::MetricsReport;
pub use summary::{Metrics, summarize};
