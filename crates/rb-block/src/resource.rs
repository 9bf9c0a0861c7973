//! `BlockResource` — one capacity-1 track block.

use std::cmp::Ordering;

use rb_core::{BlockId, Priority, TrainId};
use tracing::trace;

use crate::{AdmissionOrder, BlockError, BlockResult};

/// Outcome of [`BlockResource::request`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    /// The block was free; the requester now owns it.
    Granted,
    /// The block is occupied; the requester sits at `position` (0 = next in
    /// line) in the wait list.
    Queued { position: usize },
}

#[derive(Clone, Debug)]
struct Waiter {
    train:    TrainId,
    priority: Priority,
    /// Monotonic request counter.  The wait list is sorted by
    /// `(priority, ticket)`, so equal priorities are served in request order.
    ticket:   u64,
}

/// A track block that at most one train may occupy at a time.
#[derive(Clone, Debug)]
pub struct BlockResource {
    id:          BlockId,
    order:       AdmissionOrder,
    owner:       Option<TrainId>,
    /// Sorted: index 0 is the next requester to be granted.
    waiters:     Vec<Waiter>,
    next_ticket: u64,
    /// Total grants made over the block's lifetime.
    grants:      u64,
}

impl BlockResource {
    pub fn new(id: BlockId, order: AdmissionOrder) -> Self {
        Self {
            id,
            order,
            owner:       None,
            waiters:     Vec::new(),
            next_ticket: 0,
            grants:      0,
        }
    }

    /// Ask for exclusive occupancy.
    ///
    /// Grants immediately when the block is free.  Otherwise the requester is
    /// queued in `(priority, ticket)` order.
    pub fn request(&mut self, train: TrainId, priority: Priority) -> BlockResult<Admission> {
        if self.owner == Some(train) || self.waiters.iter().any(|w| w.train == train) {
            return Err(BlockError::DuplicateRequest { block: self.id, train });
        }

        let ticket = self.next_ticket;
        self.next_ticket += 1;

        if self.owner.is_none() {
            self.owner = Some(train);
            self.grants += 1;
            trace!(block = %self.id, %train, "granted on request");
            return Ok(Admission::Granted);
        }

        let waiter = Waiter { train, priority, ticket };
        let position = self
            .waiters
            .partition_point(|w| self.serves_first(w, &waiter) == Ordering::Less);
        self.waiters.insert(position, waiter);
        trace!(block = %self.id, %train, %priority, position, ticket, "queued");
        Ok(Admission::Queued { position })
    }

    /// Give up occupancy held by `train`.
    ///
    /// If anyone is waiting, the head of the wait list becomes the owner in
    /// the same step and is returned so the caller can notify it.
    pub fn release(&mut self, train: TrainId) -> BlockResult<Option<TrainId>> {
        if self.owner != Some(train) {
            return Err(BlockError::InvalidRelease {
                block: self.id,
                train,
                owner: self.owner,
            });
        }

        if self.waiters.is_empty() {
            self.owner = None;
            trace!(block = %self.id, %train, "released; block free");
            return Ok(None);
        }

        let next = self.waiters.remove(0);
        self.owner = Some(next.train);
        self.grants += 1;
        trace!(block = %self.id, %train, next = %next.train, ticket = next.ticket, "released; handed over");
        Ok(Some(next.train))
    }

    /// Grant order between two waiters: priority under the block's
    /// admission order, then ticket.
    fn serves_first(&self, a: &Waiter, b: &Waiter) -> Ordering {
        self.order
            .compare(a.priority, b.priority)
            .then(a.ticket.cmp(&b.ticket))
    }

    #[inline]
    pub fn id(&self) -> BlockId {
        self.id
    }

    #[inline]
    pub fn owner(&self) -> Option<TrainId> {
        self.owner
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.owner.is_none()
    }

    /// Waiting trains in the order they will be granted.
    pub fn waiting(&self) -> impl Iterator<Item = TrainId> + '_ {
        self.waiters.iter().map(|w| w.train)
    }

    pub fn queue_len(&self) -> usize {
        self.waiters.len()
    }

    pub fn grants(&self) -> u64 {
        self.grants
    }
}
