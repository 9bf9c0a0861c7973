//! Plain data row types written by output backends.

use rb_core::time::round2;
use rb_metrics::Metrics;
use rb_sim::RunStats;
use rb_train::SegmentRecord;

/// One timeline row: a train's traversal of one block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentRow {
    pub train: u32,
    /// 1-based position of the block in the train's route.
    pub block: u32,
    pub start: f64,
    pub end:   f64,
}

impl From<&SegmentRecord> for SegmentRow {
    fn from(record: &SegmentRecord) -> Self {
        Self {
            train: record.train.0,
            block: record.block_index,
            start: round2(record.start.0),
            end:   round2(record.end.0),
        }
    }
}

/// The single summary row written at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsRow {
    pub seed:             u64,
    pub final_time:       f64,
    pub active_trains:    u64,
    pub avg_delay:        f64,
    pub segments:         u64,
    pub completed_trains: u64,
    pub aborted_trains:   u64,
}

impl MetricsRow {
    pub fn new(seed: u64, metrics: &Metrics, stats: &RunStats) -> Self {
        Self {
            seed,
            final_time:       round2(stats.final_time.0),
            active_trains:    metrics.active_trains as u64,
            avg_delay:        metrics.avg_delay,
            segments:         stats.segments as u64,
            completed_trains: stats.completed_trains as u64,
            aborted_trains:   stats.aborted_trains as u64,
        }
    }
}
