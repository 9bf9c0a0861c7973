//! The `Sim` struct and its event loop.

use rb_block::{Admission, Topology};
use rb_clock::Scheduler;
use rb_core::{BlockId, SimConfig, SimTime, TrainId};
use rb_train::{SegmentRecord, TrainError, TrainProcess, TrainState, TravelModel};
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use crate::{SimError, SimEvent, SimObserver, SimResult};

// ── RunStats ──────────────────────────────────────────────────────────────────

/// Counters collected while the loop runs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunStats {
    /// Events fired by the scheduler.
    pub events:           u64,
    /// Block grants acted on by trains.
    pub grants:           u64,
    /// Segments appended to the log.
    pub segments:         usize,
    pub completed_trains: usize,
    pub aborted_trains:   usize,
    /// Clock reading when the run stopped.
    pub final_time:       SimTime,
}

// ── RunState ──────────────────────────────────────────────────────────────────

/// Everything the event handlers mutate, kept apart from the scheduler so the
/// loop can lend both out at once.
pub(crate) struct RunState {
    pub(crate) topology: Topology,
    pub(crate) trains:   Vec<TrainProcess>,
    /// `TrainId` → index into `trains`.
    pub(crate) slots:    FxHashMap<TrainId, usize>,
    /// The run's single segment log.  Only the driver appends to it.
    pub(crate) log:      Vec<SegmentRecord>,
    pub(crate) aborted:  Vec<TrainError>,
    pub(crate) stats:    RunStats,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// One simulation run.
///
/// `Sim<T>` owns the clock, the block topology, every train process, and the
/// segment log.  It is built fresh for each run and nothing survives between
/// runs.
///
/// Create via [`SimBuilder`][crate::SimBuilder] or
/// [`Scenario::build`][crate::Scenario::build].
pub struct Sim<T: TravelModel> {
    /// Horizon and seed.
    pub config: SimConfig,

    /// Virtual clock and pending events.
    pub(crate) clock: Scheduler<SimEvent>,

    pub(crate) state: RunState,

    /// The travel-time model.  Called once per block grant.
    pub travel: T,
}

impl<T: TravelModel> Sim<T> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until no event remains at or before `config.horizon`.
    ///
    /// Calls observer hooks as trains move.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    ///
    /// A malformed route aborts only the train that owns it.  Any other
    /// error (a block protocol violation, an invalid travel time) stops the
    /// whole run and is returned; the log then holds whatever was recorded
    /// before the failure.
    #[tracing::instrument(skip_all, fields(seed = self.config.seed, horizon = %self.config.horizon))]
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        observer.on_run_start(&self.config, self.state.trains.len());
        info!(
            trains  = self.state.trains.len(),
            blocks  = self.state.topology.len(),
            pending = self.clock.len(),
            "run started"
        );

        let horizon = self.config.end_time();
        let travel = &self.travel;
        let fired = self.clock.run_until(horizon, &mut self.state, |clock, state, event| {
            state.dispatch(clock, event, travel, observer)
        })?;

        let state = &mut self.state;
        state.stats.events += fired;
        state.stats.final_time = self.clock.now();
        info!(
            events    = state.stats.events,
            segments  = state.stats.segments,
            completed = state.stats.completed_trains,
            aborted   = state.stats.aborted_trains,
            unfinished = self.clock.len(),
            "run reached horizon"
        );
        observer.on_run_end(&state.stats);
        Ok(())
    }

    /// Current virtual time.
    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    /// Segments completed so far, in completion order.
    pub fn log(&self) -> &[SegmentRecord] {
        &self.state.log
    }

    /// Take the log, consuming the run.
    pub fn into_log(self) -> Vec<SegmentRecord> {
        self.state.log
    }

    /// Trains dropped at startup, in the order they were dropped.
    pub fn aborted(&self) -> &[TrainError] {
        &self.state.aborted
    }

    pub fn stats(&self) -> &RunStats {
        &self.state.stats
    }

    pub fn topology(&self) -> &Topology {
        &self.state.topology
    }

    /// Lifecycle state of `train`, or `None` if it is not part of this run.
    pub fn train_state(&self, train: TrainId) -> Option<TrainState> {
        let &slot = self.state.slots.get(&train)?;
        Some(self.state.trains[slot].state())
    }

    /// Events still pending beyond the horizon (trains frozen mid-route).
    pub fn pending_events(&self) -> usize {
        self.clock.len()
    }
}

impl RunState {
    fn process_mut(&mut self, train: TrainId) -> SimResult<&mut TrainProcess> {
        let &slot = self.slots.get(&train).ok_or(SimError::UnknownTrain(train))?;
        Ok(&mut self.trains[slot])
    }

    /// Handle one event at the scheduler's current time.
    fn dispatch<T: TravelModel, O: SimObserver>(
        &mut self,
        clock:    &mut Scheduler<SimEvent>,
        event:    SimEvent,
        travel:   &T,
        observer: &mut O,
    ) -> SimResult<()> {
        let now = clock.now();
        match event {
            // ── Enter: entry delay elapsed ────────────────────────────────
            SimEvent::Enter(train) => {
                let block_count = self.topology.len();
                match self.process_mut(train)?.start(block_count) {
                    Ok(first) => {
                        debug!(%now, %train, "entered");
                        self.request(clock, train, first)?;
                    }
                    Err(e @ TrainError::MalformedRoute { .. }) => {
                        // Only this train is dropped; the run carries on.
                        warn!(%now, %train, error = %e, "train aborted");
                        observer.on_train_aborted(now, &e);
                        self.stats.aborted_trains += 1;
                        self.aborted.push(e);
                    }
                    Err(e) => return Err(e.into()),
                }
            }

            // ── Granted: start travelling through the block ───────────────
            SimEvent::Granted { train, block } => {
                let minutes = self.process_mut(train)?.granted(block, now, travel)?;
                self.stats.grants += 1;
                debug!(%now, %train, %block, minutes, "occupying");
                observer.on_grant(now, train, block);
                clock.schedule_after(minutes, SimEvent::Arrive(train))?;
            }

            // ── Arrive: release, log, move on ─────────────────────────────
            SimEvent::Arrive(train) => {
                let arrival = self.process_mut(train)?.arrive(now)?;

                let handed_to = self.topology.get_mut(arrival.released)?.release(train)?;
                if let Some(next_owner) = handed_to {
                    clock.schedule_now(SimEvent::Granted { train: next_owner, block: arrival.released });
                }

                debug!(
                    %train,
                    block = arrival.record.block_index,
                    start = %arrival.record.start,
                    end   = %arrival.record.end,
                    "segment complete"
                );
                self.log.push(arrival.record);
                self.stats.segments += 1;
                observer.on_segment(&arrival.record);

                match arrival.next {
                    Some(next) => self.request(clock, train, next)?,
                    None => {
                        debug!(%now, %train, "route completed");
                        self.stats.completed_trains += 1;
                    }
                }
            }
        }
        Ok(())
    }

    /// Ask `block` for `train`.  An immediate grant is delivered as an event
    /// at the current instant; a queued request waits for a release.
    fn request(
        &mut self,
        clock: &mut Scheduler<SimEvent>,
        train: TrainId,
        block: BlockId,
    ) -> SimResult<()> {
        let priority = self.process_mut(train)?.spec().priority;
        match self.topology.get_mut(block)?.request(train, priority)? {
            Admission::Granted => clock.schedule_now(SimEvent::Granted { train, block }),
            Admission::Queued { position } => {
                debug!(now = %clock.now(), %train, %block, %priority, position, "waiting");
            }
        }
        Ok(())
    }
}
