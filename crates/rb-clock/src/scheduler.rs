//! `Scheduler<E>` — the virtual clock and its pending-event queue.
//!
//! # Performance note
//!
//! `BinaryHeap` gives O(log P) push and pop where P = number of pending
//! events.  A run holds at most a couple of pending events per train (its
//! next timer plus a grant notification), so P stays tiny.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rb_core::SimTime;
use tracing::trace;

use crate::{ClockError, ClockResult};

// ── Heap entry ────────────────────────────────────────────────────────────────

/// One pending event.  Ordered so that the *earliest* `(at, seq)` pair is
/// the heap maximum.
struct Scheduled<E> {
    at:    SimTime,
    seq:   u64,
    event: E,
}

impl<E> PartialEq for Scheduled<E> {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at && self.seq == other.seq
    }
}

impl<E> Eq for Scheduled<E> {}

impl<E> PartialOrd for Scheduled<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Scheduled<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other.at.cmp(&self.at).then_with(|| other.seq.cmp(&self.seq))
    }
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

/// Priority-ordered timer facility over event payloads of type `E`.
pub struct Scheduler<E> {
    now:      SimTime,
    next_seq: u64,
    queue:    BinaryHeap<Scheduled<E>>,
    /// Total events handed out by `pop_until`.
    fired:    u64,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self {
            now:      SimTime::ZERO,
            next_seq: 0,
            queue:    BinaryHeap::new(),
            fired:    0,
        }
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current virtual time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Register `event` to fire `delay` minutes after the current time.
    ///
    /// Returns the absolute time the event was scheduled for.  Negative, NaN,
    /// and infinite delays are rejected with [`ClockError::InvalidDelay`].
    pub fn schedule_after(&mut self, delay: f64, event: E) -> ClockResult<SimTime> {
        if !delay.is_finite() || delay < 0.0 {
            return Err(ClockError::InvalidDelay(delay));
        }
        let at = self.now.after(delay);
        self.push(at, event);
        Ok(at)
    }

    /// Register `event` at the current instant, behind everything already
    /// queued for this instant.
    pub fn schedule_now(&mut self, event: E) {
        let at = self.now;
        self.push(at, event);
    }

    fn push(&mut self, at: SimTime, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        trace!(now = %self.now, %at, seq, "schedule event");
        self.queue.push(Scheduled { at, seq, event });
    }

    /// Remove and return the earliest pending event if it is due at or before
    /// `until`, advancing the clock to its time.
    ///
    /// Returns `None` (and leaves the clock untouched) when the queue is empty
    /// or the next event lies beyond `until`.
    pub fn pop_until(&mut self, until: SimTime) -> Option<E> {
        if self.queue.peek()?.at > until {
            return None;
        }
        let item = self.queue.pop()?;
        debug_assert!(item.at >= self.now, "clock moved backward");
        self.now = item.at;
        self.fired += 1;
        trace!(now = %self.now, seq = item.seq, pending = self.queue.len(), "fire event");
        Some(item.event)
    }

    /// Drive the queue until nothing remains at or before `until`, handing
    /// each event to `handler` together with the scheduler itself so it can
    /// register follow-ups.
    ///
    /// The first handler error stops the loop and is returned.  On success
    /// the clock is left at `until` (or later, if it was already past it) and
    /// the number of events fired is returned.
    pub fn run_until<W, Fail>(
        &mut self,
        until:   SimTime,
        world:   &mut W,
        mut handler: impl FnMut(&mut Self, &mut W, E) -> Result<(), Fail>,
    ) -> Result<u64, Fail> {
        let before = self.fired;
        while let Some(event) = self.pop_until(until) {
            handler(self, world, event)?;
        }
        self.advance_to(until);
        Ok(self.fired - before)
    }

    /// Move the clock forward to `t` without firing anything.  Never moves
    /// it backward.
    pub fn advance_to(&mut self, t: SimTime) {
        if t > self.now {
            self.now = t;
        }
    }

    /// Time of the earliest pending event, or `None` if empty.
    pub fn next_time(&self) -> Option<SimTime> {
        self.queue.peek().map(|s| s.at)
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Total events fired since construction.
    pub fn fired(&self) -> u64 {
        self.fired
    }
}
