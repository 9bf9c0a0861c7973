//! three_train — the fixed three-block, three-train line.
//!
//! Runs the built-in scenario once, prints the segment timeline and the
//! metrics report as JSON, and writes `timeline.csv`/`metrics.csv` under
//! `output/three_train`.
//!
//! ```text
//! three_train [SEED] [TRAINS.csv]
//! ```
//!
//! With a train CSV the table replaces the built-in one (same three-block
//! line and horizon).

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use rb_metrics::{MetricsReport, Presentation, summarize};
use rb_output::{CsvWriter, SimOutputObserver};
use rb_sim::{Scenario, fresh_seed, load_trains_csv, run_batch};
use rb_train::{SegmentRecord, UniformTravel};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR:   &str  = "output/three_train";
/// Replications for the batch summary printed at the end.
const BATCH_RUNS:   u64   = 16;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(s) => s.parse::<u64>().with_context(|| format!("invalid seed {s:?}"))?,
        None => fresh_seed(),
    };
    let trains_csv: Option<PathBuf> = args.next().map(PathBuf::from);

    println!("=== three_train — rail block simulator ===");
    println!("Seed: {seed}");

    // 1. Scenario.
    let mut scenario = Scenario::three_train(seed);
    if let Some(path) = &trains_csv {
        scenario.trains = load_trains_csv(path, scenario.blocks)
            .with_context(|| format!("loading {}", path.display()))?;
        println!("Loaded {} trains from {}", scenario.trains.len(), path.display());
    }

    // 2. Build and run with CSV output attached.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut sim = scenario.build(UniformTravel::default())?;
    let mut obs = SimOutputObserver::new(CsvWriter::new(Path::new(OUTPUT_DIR))?);

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    for error in sim.aborted() {
        eprintln!("aborted: {error}");
    }

    // 3. Timeline and metrics as the outer service would return them.
    let mut rng = rb_core::SimRng::new(seed).child(1);
    let report = MetricsReport {
        metrics:      summarize(sim.log()),
        presentation: Presentation::draw(sim.log(), &mut rng),
    };
    let timeline: Vec<SegmentRecord> = sim.log().iter().map(SegmentRecord::rounded).collect();
    println!("timeline = {}", serde_json::to_string_pretty(&timeline)?);
    println!("metrics  = {}", serde_json::to_string_pretty(&report)?);
    println!();

    let stats = sim.stats();
    println!("Run complete in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    println!("  events    : {}", stats.events);
    println!("  segments  : {}", stats.segments);
    println!("  completed : {}", stats.completed_trains);
    println!("  output    : {OUTPUT_DIR}/timeline.csv, {OUTPUT_DIR}/metrics.csv");
    println!();

    // 4. Replications.
    let seeds: Vec<u64> = (0..BATCH_RUNS).map(|i| seed.wrapping_add(i)).collect();
    let batch = run_batch(&scenario, &UniformTravel::default(), &seeds)?;
    let mean = batch.iter().map(|m| m.avg_delay).sum::<f64>() / batch.len() as f64;
    info!(runs = batch.len(), mean_avg_delay = mean, "batch finished");

    println!("{:<8} {:<8} {:<10}", "Seed", "Trains", "Avg delay");
    println!("{}", "-".repeat(28));
    for (seed, m) in seeds.iter().zip(&batch) {
        println!("{:<8} {:<8} {:<10.2}", seed, m.active_trains, m.avg_delay);
    }

    Ok(())
}
