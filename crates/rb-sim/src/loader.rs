//! CSV train-table loader.
//!
//! # CSV format
//!
//! One row per train.  Rows enter in file order when entry delays tie.
//!
//! ```csv
//! train_id,category,priority,speed,entry_delay,route
//! 1,Express,1,60,0,
//! 2,Freight,3,40,2,1-2-3
//! 3,Passenger,2,50,4,2-3
//! ```
//!
//! **`route`** field (optional column):
//!
//! | Value     | Meaning                                         |
//! |-----------|-------------------------------------------------|
//! | *(empty)* | every block of the line, in order               |
//! | `1-2-3`   | 1-based block numbers separated by `-`          |
//!
//! Block numbers are only parsed here.  Whether they exist in the topology
//! is checked when the train starts, so a bad route aborts that train alone.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rb_core::{BlockId, Priority, TrainCategory, TrainId};
use rb_train::{Route, TrainSpec};

use crate::{SimError, SimResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TrainRecord {
    train_id:    u32,
    category:    String,
    priority:    i32,
    speed:       f64,
    entry_delay: f64,
    #[serde(default)]
    route:       Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a train table from a CSV file.
///
/// `block_count` is the length of the line and sets the default route for
/// rows with an empty `route` field.
pub fn load_trains_csv(path: &Path, block_count: usize) -> SimResult<Vec<TrainSpec>> {
    let file = std::fs::File::open(path)?;
    load_trains_reader(file, block_count)
}

/// Like [`load_trains_csv`] but accepts any `Read` source.
pub fn load_trains_reader<R: Read>(reader: R, block_count: usize) -> SimResult<Vec<TrainSpec>> {
    let line_len = u32::try_from(block_count).map_err(|_| {
        SimError::Config(format!("{block_count} blocks exceed the addressable block range"))
    })?;
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    csv_reader
        .deserialize::<TrainRecord>()
        .map(|result| -> SimResult<TrainSpec> {
            let row = result?;
            let category: TrainCategory = row.category.parse()?;
            let route = match row.route.as_deref().map(str::trim) {
                None | Some("") => Route::line(line_len),
                Some(text) => parse_route(text)?,
            };
            Ok(TrainSpec::new(
                TrainId(row.train_id),
                category,
                Priority(row.priority),
                row.speed,
                row.entry_delay,
                route,
            ))
        })
        .collect()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_route(text: &str) -> SimResult<Route> {
    text.split('-')
        .map(|part| {
            part.trim()
                .parse::<u32>()
                .ok()
                .and_then(BlockId::from_number)
                .ok_or_else(|| {
                    SimError::Parse(format!(
                        "invalid block {part:?} in route {text:?}: expected 1-based block numbers"
                    ))
                })
        })
        .collect::<SimResult<Vec<_>>>()
        .map(Route::new)
}
