//! `SimulationEngine` — the future event list plus the clock.

use std::fmt;

use isim_core::{SimClock, SimTime};

use crate::{Event, EventQueue};

/// The discrete-event engine the model layer schedules into.
///
/// Removing an event is the only thing that advances simulated time: after
/// `remove_earliest` returns an event, `now()` equals that event's
/// timestamp.
#[derive(Clone, Debug)]
pub struct SimulationEngine<K> {
    queue: EventQueue<K>,
    clock: SimClock,
}

impl<K> Default for SimulationEngine<K> {
    fn default() -> Self {
        Self {
            queue: EventQueue::new(),
            clock: SimClock::new(),
        }
    }
}

impl<K> SimulationEngine<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timestamp of the most recently removed event (zero before the first).
    #[inline]
    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Schedule `kind` at absolute time `at`.
    ///
    /// Scheduling into the past is a model bug and is not validated here.
    pub fn schedule(&mut self, at: SimTime, kind: K) -> u64 {
        self.queue.insert(at, kind)
    }

    /// Schedule `kind` at `now + delay`.
    pub fn schedule_in(&mut self, delay: f64, kind: K) -> u64 {
        let at = self.now() + delay;
        self.queue.insert(at, kind)
    }

    /// Remove the earliest event and advance the clock to its timestamp.
    ///
    /// `None` means the run is over; it is not an error.
    pub fn remove_earliest(&mut self) -> Option<Event<K>> {
        let event = self.queue.pop_earliest()?;
        self.clock.advance_to(event.time);
        Some(event)
    }

    pub fn peek(&self) -> Option<(SimTime, &K)> {
        self.queue.peek()
    }

    pub fn pending(&self) -> impl Iterator<Item = (SimTime, &K)> + '_ {
        self.queue.iter()
    }

    pub fn size(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<K> SimulationEngine<K> {
    /// Render the pending timestamps as `| 17 | 31 | 77 |` for trace output.
    pub fn describe_pending(&self) -> PendingList<'_, K> {
        PendingList(&self.queue)
    }
}

/// Display adapter returned by [`SimulationEngine::describe_pending`].
pub struct PendingList<'a, K>(&'a EventQueue<K>);

impl<K> fmt::Display for PendingList<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for (time, _) in self.0.iter() {
            write!(f, " {} |", time.0)?;
        }
        Ok(())
    }
}
