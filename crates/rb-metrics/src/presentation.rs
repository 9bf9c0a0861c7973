//! Dashboard figures with no simulation-level meaning.
//!
//! On-time percentage, average speed, and efficiency are drawn from fixed
//! ranges (70–100, 50–90, 70–95) using the caller's RNG.  Alerts are derived
//! from the log: the block with the most occupied time is flagged as
//! congested.

use std::collections::BTreeMap;

use rb_core::{BlockId, SimRng};
use rb_train::SegmentRecord;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Presentation {
    pub on_time:    u32,
    pub avg_speed:  u32,
    pub efficiency: u32,
    pub alerts:     Vec<String>,
}

impl Presentation {
    pub fn draw(log: &[SegmentRecord], rng: &mut SimRng) -> Self {
        Self {
            on_time:    rng.gen_range(70..=100),
            avg_speed:  rng.gen_range(50..=90),
            efficiency: rng.gen_range(70..=95),
            alerts:     congestion_alerts(log),
        }
    }
}

/// One alert naming the busiest block, or none for an empty log.
fn congestion_alerts(log: &[SegmentRecord]) -> Vec<String> {
    let mut busy: BTreeMap<BlockId, f64> = BTreeMap::new();
    for record in log {
        *busy.entry(record.block).or_insert(0.0) += record.duration();
    }
    busy.into_iter()
        .max_by(|a, b| a.1.total_cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
        .map(|(block, _)| format!("Congestion detected near Block {}", block.number()))
        .into_iter()
        .collect()
}
