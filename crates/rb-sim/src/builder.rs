//! Fluent builder for constructing a [`Sim`].

use rb_block::{AdmissionOrder, Topology};
use rb_clock::Scheduler;
use rb_core::{SimConfig, SimTime};
use rb_train::{TrainProcess, TrainSpec, TravelModel};
use rustc_hash::FxHashMap;

use crate::sim::{RunState, RunStats};
use crate::{Sim, SimError, SimEvent, SimResult};

/// Fluent builder for [`Sim<T>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — horizon and seed
/// - `T: TravelModel` — e.g. [`rb_train::UniformTravel`]
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                      |
/// |---------------------|------------------------------|
/// | `.blocks(n)`        | 3                            |
/// | `.admission(o)`     | `AdmissionOrder::LowerFirst` |
/// | `.trains(v)`        | no trains                    |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, UniformTravel::default())
///     .blocks(3)
///     .trains(specs)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<T: TravelModel> {
    config:    SimConfig,
    travel:    T,
    blocks:    usize,
    admission: AdmissionOrder,
    trains:    Vec<TrainSpec>,
}

impl<T: TravelModel> SimBuilder<T> {
    /// Number of blocks used when `.blocks()` is not called.
    pub const DEFAULT_BLOCKS: usize = 3;

    pub fn new(config: SimConfig, travel: T) -> Self {
        Self {
            config,
            travel,
            blocks:    Self::DEFAULT_BLOCKS,
            admission: AdmissionOrder::default(),
            trains:    Vec::new(),
        }
    }

    /// Length of the block line.  Must be at least 1.
    pub fn blocks(mut self, count: usize) -> Self {
        self.blocks = count;
        self
    }

    /// Which way priority numbers point on every block.
    pub fn admission(mut self, order: AdmissionOrder) -> Self {
        self.admission = order;
        self
    }

    /// Replace the train table.
    ///
    /// Trains whose entry delays coincide enter in table order.
    pub fn trains(mut self, trains: Vec<TrainSpec>) -> Self {
        self.trains = trains;
        self
    }

    /// Append one train to the table.
    pub fn train(mut self, spec: TrainSpec) -> Self {
        self.trains.push(spec);
        self
    }

    /// Validate inputs, schedule every train's entry, and return a
    /// ready-to-run [`Sim`].
    ///
    /// Routes are not checked here: a malformed route is a per-train
    /// failure reported when that train starts.
    pub fn build(self) -> SimResult<Sim<T>> {
        // ── Validate run-level config ─────────────────────────────────────
        SimTime::new(self.config.horizon.0)?;
        if self.blocks == 0 {
            return Err(SimError::Config("a run needs at least one block".into()));
        }
        let line_len = u32::try_from(self.blocks).map_err(|_| {
            SimError::Config(format!("{} blocks exceed the addressable block range", self.blocks))
        })?;

        // ── Register trains and their entry events ────────────────────────
        let mut clock = Scheduler::new();
        let mut slots = FxHashMap::default();
        let mut trains = Vec::with_capacity(self.trains.len());

        for spec in self.trains {
            spec.validate()?;
            if slots.insert(spec.id, trains.len()).is_some() {
                return Err(SimError::DuplicateTrain(spec.id));
            }
            clock.schedule_after(spec.entry_delay, SimEvent::Enter(spec.id))?;
            trains.push(TrainProcess::new(spec, self.config.seed));
        }

        Ok(Sim {
            clock,
            state: RunState {
                topology: Topology::line(line_len, self.admission),
                trains,
                slots,
                log:      Vec::new(),
                aborted:  Vec::new(),
                stats:    RunStats::default(),
            },
            config: self.config,
            travel: self.travel,
        })
    }
}
