//! `TrainProcess` — the per-train state machine.

use rb_core::{BlockId, SimTime, TrainId, TrainRng};

use crate::{RouteDefect, SegmentRecord, TrainError, TrainResult, TrainSpec, TravelModel};

/// Where a train is in its lifecycle.  Positions are 0-based route indices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrainState {
    /// Created; entry delay not yet reached.
    Pending,
    /// Requested the block at this route position, not yet granted.
    WaitingForBlock(usize),
    /// Holding the block at `position` since `since`.
    Occupying { position: usize, since: SimTime },
    /// Traversed every block of its route.
    Completed,
    /// Never started because the route was malformed.
    Aborted,
}

impl TrainState {
    /// `true` once the train will never act again.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, TrainState::Completed | TrainState::Aborted)
    }
}

/// Result of finishing travel through a block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrival {
    /// The finished segment, for the driver's log.
    pub record:   SegmentRecord,
    /// The block the train must now release.
    pub released: BlockId,
    /// The next block to request, or `None` if the train is done.
    pub next:     Option<BlockId>,
}

/// One train's progress through its route.
pub struct TrainProcess {
    spec:  TrainSpec,
    state: TrainState,
    rng:   TrainRng,
}

impl TrainProcess {
    /// Create a pending process with its own RNG stream derived from `seed`.
    pub fn new(spec: TrainSpec, seed: u64) -> Self {
        let rng = TrainRng::new(seed, spec.id);
        Self { spec, state: TrainState::Pending, rng }
    }

    /// Entry delay reached: validate the route and move to waiting for the
    /// first block, which is returned.
    ///
    /// A malformed route moves the train to `Aborted` and returns
    /// [`TrainError::MalformedRoute`].
    pub fn start(&mut self, block_count: usize) -> TrainResult<BlockId> {
        if self.state != TrainState::Pending {
            return Err(TrainError::NotPending { train: self.spec.id, state: self.state });
        }
        let first = self
            .spec
            .route
            .check(block_count)
            .and_then(|()| self.spec.route.get(0).ok_or(RouteDefect::Empty));
        let first = match first {
            Ok(block) => block,
            Err(defect) => {
                self.state = TrainState::Aborted;
                return Err(TrainError::MalformedRoute { train: self.spec.id, defect });
            }
        };
        self.state = TrainState::WaitingForBlock(0);
        Ok(first)
    }

    /// The block this train is waiting for has been granted at `now`.
    ///
    /// Moves to `Occupying` and returns the travel time drawn from `travel`.
    pub fn granted<T: TravelModel>(
        &mut self,
        block:  BlockId,
        now:    SimTime,
        travel: &T,
    ) -> TrainResult<f64> {
        let TrainState::WaitingForBlock(position) = self.state else {
            return Err(self.unexpected_grant(block));
        };
        if self.spec.route.get(position) != Some(block) {
            return Err(self.unexpected_grant(block));
        }
        self.state = TrainState::Occupying { position, since: now };
        Ok(travel.travel_time(&self.spec, block, &mut self.rng))
    }

    /// Travel through the current block finished at `now`.
    ///
    /// Produces the segment record and moves to waiting for the next block,
    /// or to `Completed` after the last one.
    pub fn arrive(&mut self, now: SimTime) -> TrainResult<Arrival> {
        let TrainState::Occupying { position, since } = self.state else {
            return Err(TrainError::UnexpectedArrival { train: self.spec.id, state: self.state });
        };
        let released = self.block_at(position)?;
        let record = SegmentRecord {
            train:       self.spec.id,
            block_index: position as u32 + 1,
            block:       released,
            start:       since,
            end:         now,
        };

        let next = self.spec.route.get(position + 1);
        self.state = match next {
            Some(_) => TrainState::WaitingForBlock(position + 1),
            None    => TrainState::Completed,
        };
        Ok(Arrival { record, released, next })
    }

    fn block_at(&self, position: usize) -> TrainResult<BlockId> {
        self.spec.route.get(position).ok_or(TrainError::UnexpectedArrival {
            train: self.spec.id,
            state: self.state,
        })
    }

    fn unexpected_grant(&self, block: BlockId) -> TrainError {
        TrainError::UnexpectedGrant { train: self.spec.id, block, state: self.state }
    }

    #[inline]
    pub fn id(&self) -> TrainId {
        self.spec.id
    }

    #[inline]
    pub fn spec(&self) -> &TrainSpec {
        &self.spec
    }

    #[inline]
    pub fn state(&self) -> TrainState {
        self.state
    }
}
