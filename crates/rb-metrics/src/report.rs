//! `MetricsReport` — what the metrics endpoint hands back.

use crate::{Metrics, Presentation};

/// Guaranteed metrics plus presentation placeholders.
///
/// JSON shape: `{"metrics": {active_trains, avg_delay, occupied}, on_time,
/// avg_speed, efficiency, alerts}`.  `metrics` stays nested because
/// `occupied` is keyed by train id, and a flattened map cannot read its
/// integer keys back.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsReport {
    pub metrics:      Metrics,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub presentation: Presentation,
}
