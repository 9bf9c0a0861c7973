//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `timeline.csv` (`train,block,start,end`)
//! - `metrics.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{MetricsRow, OutputError, OutputResult, SegmentRow};

/// Writes run output to two CSV files.
pub struct CsvWriter {
    timeline: Writer<File>,
    metrics:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut timeline = Writer::from_path(dir.join("timeline.csv"))?;
        timeline.write_record(["train", "block", "start", "end"])?;

        let mut metrics = Writer::from_path(dir.join("metrics.csv"))?;
        metrics.write_record([
            "seed",
            "final_time",
            "active_trains",
            "avg_delay",
            "segments",
            "completed_trains",
            "aborted_trains",
        ])?;

        Ok(Self { timeline, metrics, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_segments(&mut self, rows: &[SegmentRow]) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished("timeline"));
        }
        for row in rows {
            self.timeline.write_record(&[
                row.train.to_string(),
                row.block.to_string(),
                format!("{:.2}", row.start),
                format!("{:.2}", row.end),
            ])?;
        }
        Ok(())
    }

    fn write_metrics(&mut self, row: &MetricsRow) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished("metrics"));
        }
        self.metrics.write_record(&[
            row.seed.to_string(),
            format!("{:.2}", row.final_time),
            row.active_trains.to_string(),
            format!("{:.2}", row.avg_delay),
            row.segments.to_string(),
            row.completed_trains.to_string(),
            row.aborted_trains.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.timeline.flush()?;
        self.metrics.flush()?;
        Ok(())
    }
}
