//! Integration tests for rb-output.

#[cfg(test)]
mod row_tests {
    use rb_core::{BlockId, SimTime, TrainId};
    use rb_train::SegmentRecord;

    use crate::row::SegmentRow;

    #[test]
    fn segment_row_rounds_times() {
        let record = SegmentRecord {
            train:       TrainId(2),
            block_index: 3,
            block:       BlockId(2),
            start:       SimTime(4.126),
            end:         SimTime(7.0049),
        };
        let row = SegmentRow::from(&record);
        assert_eq!(row, SegmentRow { train: 2, block: 3, start: 4.13, end: 7.0 });
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{MetricsRow, SegmentRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn metrics_row() -> MetricsRow {
        MetricsRow {
            seed:             9,
            final_time:       50.0,
            active_trains:    3,
            avg_delay:        10.5,
            segments:         9,
            completed_trains: 3,
            aborted_trains:   0,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("timeline.csv").exists());
        assert!(dir.path().join("metrics.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("timeline.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["train", "block", "start", "end"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("metrics.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            ["seed", "final_time", "active_trains", "avg_delay", "segments", "completed_trains", "aborted_trains"]
        );
    }

    #[test]
    fn csv_segments_written_with_two_decimals() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_segments(&[
            SegmentRow { train: 1, block: 1, start: 0.0, end: 2.5 },
            SegmentRow { train: 1, block: 2, start: 2.5, end: 5.25 },
        ])
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("timeline.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][2], "0.00");
        assert_eq!(&rows[0][3], "2.50");
        assert_eq!(&rows[1][1], "2");
        assert_eq!(&rows[1][3], "5.25");
    }

    #[test]
    fn csv_metrics_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_metrics(&metrics_row()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("metrics.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "9");
        assert_eq!(&rows[0][3], "10.50");
        assert_eq!(&rows[0][4], "9");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_write_after_finish_is_rejected() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        let err = w.write_metrics(&metrics_row()).unwrap_err();
        assert!(matches!(err, crate::OutputError::Finished("metrics")));
    }

    #[test]
    fn csv_missing_directory_is_an_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn integration_csv() {
        use rb_sim::Scenario;
        use rb_train::UniformTravel;

        use crate::observer::SimOutputObserver;

        let mut sim = Scenario::three_train(5).build(UniformTravel::default()).unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join("timeline.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), sim.log().len());
        assert_eq!(&rows[0][0], "1", "T1 finishes the first segment");
        assert_eq!(&rows[0][2], "0.00");

        let mut rdr = csv::Reader::from_path(dir.path().join("metrics.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "5");
        assert_eq!(&rows[0][1], "50.00");
        assert_eq!(&rows[0][2], "3");
        let avg = rb_metrics::summarize(sim.log()).avg_delay;
        assert_eq!(&rows[0][3], format!("{avg:.2}"));
    }
}

// ── Observer error handling ───────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use rb_sim::Scenario;
    use rb_train::FixedTravel;

    use crate::observer::SimOutputObserver;
    use crate::row::{MetricsRow, SegmentRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    /// Keeps rows in memory and fails every write after `fail_after` rows.
    #[derive(Default)]
    struct MemoryWriter {
        segments:   Vec<SegmentRow>,
        metrics:    Vec<MetricsRow>,
        finished:   usize,
        fail_after: Option<usize>,
    }

    impl OutputWriter for MemoryWriter {
        fn write_segments(&mut self, rows: &[SegmentRow]) -> OutputResult<()> {
            if self.fail_after.is_some_and(|n| self.segments.len() >= n) {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.segments.extend_from_slice(rows);
            Ok(())
        }

        fn write_metrics(&mut self, row: &MetricsRow) -> OutputResult<()> {
            self.metrics.push(*row);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn rows_follow_the_log() {
        let mut sim = Scenario::three_train(1).build(FixedTravel(3.0)).unwrap();
        let mut obs = SimOutputObserver::new(MemoryWriter::default());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        let expected: Vec<SegmentRow> = sim.log().iter().map(SegmentRow::from).collect();
        assert_eq!(writer.segments, expected);
        assert_eq!(writer.metrics.len(), 1);
        assert_eq!(writer.metrics[0].seed, 1);
        assert_eq!(writer.metrics[0].segments, 9);
        assert_eq!(writer.finished, 1);
    }

    #[test]
    fn first_error_is_kept() {
        let mut sim = Scenario::three_train(1).build(FixedTravel(3.0)).unwrap();
        let writer = MemoryWriter { fail_after: Some(2), ..Default::default() };
        let mut obs = SimOutputObserver::new(writer);
        // The run itself is unaffected by output failures.
        sim.run(&mut obs).unwrap();
        assert_eq!(sim.log().len(), 9);

        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none(), "error is taken once");
        assert_eq!(obs.into_writer().segments.len(), 2);
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use crate::row::{MetricsRow, SegmentRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_segment_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_segments(&[
            SegmentRow { train: 1, block: 1, start: 0.0, end: 3.1 },
            SegmentRow { train: 1, block: 2, start: 3.1, end: 6.2 },
            SegmentRow { train: 2, block: 1, start: 3.1, end: 8.0 },
        ])
        .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM timeline", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 3);
        let end: f64 = conn
            .query_row("SELECT end FROM timeline WHERE train = 2", [], |r| r.get(0))
            .unwrap();
        assert_eq!(end, 8.0);
    }

    #[test]
    fn sqlite_metrics_row() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_metrics(&MetricsRow {
            seed:             7,
            final_time:       50.0,
            active_trains:    3,
            avg_delay:        12.34,
            segments:         9,
            completed_trains: 3,
            aborted_trains:   0,
        })
        .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (seed, avg, segments): (i64, f64, i64) = conn
            .query_row(
                "SELECT seed, avg_delay, segments FROM metrics",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!(seed, 7);
        assert_eq!(avg, 12.34);
        assert_eq!(segments, 9);
    }
}
