//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use rb_core::SimConfig;
use rb_metrics::summarize;
use rb_sim::{RunStats, SimObserver};
use rb_train::SegmentRecord;
use tracing::warn;

use crate::row::{MetricsRow, SegmentRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams timeline rows to any [`OutputWriter`] and
/// writes the metrics row when the run ends.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    seed:       u64,
    /// Records seen so far; summarized at the end of the run.
    records:    Vec<SegmentRecord>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            seed:       0,
            records:    Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_run_start(&mut self, config: &SimConfig, _trains: usize) {
        self.seed = config.seed;
        self.records.clear();
    }

    fn on_segment(&mut self, record: &SegmentRecord) {
        self.records.push(*record);
        let result = self.writer.write_segments(&[SegmentRow::from(record)]);
        self.store_err(result);
    }

    fn on_run_end(&mut self, stats: &RunStats) {
        let row = MetricsRow::new(self.seed, &summarize(&self.records), stats);
        let result = self.writer.write_metrics(&row).and_then(|()| self.writer.finish());
        self.store_err(result);
    }
}
