//! `Scenario` — a complete, self-contained description of one run.

use rb_block::AdmissionOrder;
use rb_core::{Priority, SimConfig, SimTime, TrainCategory, TrainId};
use rb_train::{Route, TrainSpec, TravelModel};

use crate::{Sim, SimBuilder, SimResult};

/// Blocks, trains, horizon, and seed for one run.
///
/// Building a scenario twice yields two independent runs; nothing is shared
/// between the resulting [`Sim`]s.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub config:    SimConfig,
    pub blocks:    usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub admission: AdmissionOrder,
    pub trains:    Vec<TrainSpec>,
}

impl Scenario {
    /// The fixed line served by the timeline and metrics operations: three
    /// blocks, three trains, horizon 50.
    ///
    /// | Train | Category  | Priority | Speed | Entry |
    /// |-------|-----------|----------|-------|-------|
    /// | T1    | Express   | 1        | 60    | 0     |
    /// | T2    | Freight   | 3        | 40    | 2     |
    /// | T3    | Passenger | 2        | 50    | 4     |
    pub fn three_train(seed: u64) -> Self {
        let route = Route::line(3);
        let train = |id, category, priority, speed, entry| {
            TrainSpec::new(TrainId(id), category, Priority(priority), speed, entry, route.clone())
        };
        Self {
            config:    SimConfig::new(SimTime(50.0), seed),
            blocks:    3,
            admission: AdmissionOrder::LowerFirst,
            trains:    vec![
                train(1, TrainCategory::Express,   1, 60.0, 0.0),
                train(2, TrainCategory::Freight,   3, 40.0, 2.0),
                train(3, TrainCategory::Passenger, 2, 50.0, 4.0),
            ],
        }
    }

    /// Same scenario, different seed.
    pub fn with_seed(&self, seed: u64) -> Self {
        let mut s = self.clone();
        s.config.seed = seed;
        s
    }

    /// Construct a fresh [`Sim`] for this scenario.
    pub fn build<T: TravelModel>(&self, travel: T) -> SimResult<Sim<T>> {
        SimBuilder::new(self.config.clone(), travel)
            .blocks(self.blocks)
            .admission(self.admission)
            .trains(self.trains.clone())
            .build()
    }
}
