//! `summarize` — the guaranteed part of the metrics contract.

use std::collections::BTreeMap;

use rb_core::TrainId;
use rb_core::time::round2;
use rb_train::SegmentRecord;

/// Aggregate statistics over one run's segment log.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    /// Number of distinct trains that completed at least one segment.
    pub active_trains: usize,
    /// Mean of per-train occupied time, rounded to two decimals.
    pub avg_delay:     f64,
    /// Total minutes each train spent occupying blocks.
    pub occupied:      BTreeMap<TrainId, f64>,
}

impl Metrics {
    /// Occupied minutes for `train`, or `None` if it logged no segment.
    pub fn occupied_by(&self, train: TrainId) -> Option<f64> {
        self.occupied.get(&train).copied()
    }
}

/// Reduce `log` to [`Metrics`].  Pure; the log is only read.
pub fn summarize(log: &[SegmentRecord]) -> Metrics {
    let mut occupied: BTreeMap<TrainId, f64> = BTreeMap::new();
    for record in log {
        *occupied.entry(record.train).or_insert(0.0) += record.duration();
    }

    let active_trains = occupied.len();
    let avg_delay = if active_trains == 0 {
        0.0
    } else {
        round2(occupied.values().sum::<f64>() / active_trains as f64)
    };

    Metrics { active_trains, avg_delay, occupied }
}
