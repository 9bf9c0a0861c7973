//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `timeline` and `metrics`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{MetricsRow, OutputError, OutputResult, SegmentRow};

/// Writes run output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS timeline (
                 train INTEGER NOT NULL,
                 block INTEGER NOT NULL,
                 start REAL    NOT NULL,
                 end   REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS metrics (
                 seed             INTEGER NOT NULL,
                 final_time       REAL    NOT NULL,
                 active_trains    INTEGER NOT NULL,
                 avg_delay        REAL    NOT NULL,
                 segments         INTEGER NOT NULL,
                 completed_trains INTEGER NOT NULL,
                 aborted_trains   INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_segments(&mut self, rows: &[SegmentRow]) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished("timeline"));
        }
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO timeline (train, block, start, end) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.train, row.block, row.start, row.end])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_metrics(&mut self, row: &MetricsRow) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished("metrics"));
        }
        // SQLite integers are signed; seeds above i64::MAX keep their bits.
        self.conn.execute(
            "INSERT INTO metrics \
             (seed, final_time, active_trains, avg_delay, segments, completed_trains, aborted_trains) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                row.seed as i64,
                row.final_time,
                row.active_trains as i64,
                row.avg_delay,
                row.segments as i64,
                row.completed_trains as i64,
                row.aborted_trains as i64,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
