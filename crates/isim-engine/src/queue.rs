//! `EventQueue` — the future event list.
//!
//! # Why a `BTreeMap`
//!
//! The key is `(timestamp, Reverse(seq))`, which gives O(log n) insert and
//! O(log n) removal of the earliest entry, and encodes the tie-break policy
//! (newest first among equal timestamps) directly in the key order.
//! `ordered_float::OrderedFloat` supplies the total order on `f64` that the
//! map needs.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use isim_core::SimTime;
use ordered_float::OrderedFloat;

use crate::Event;

type Key = (OrderedFloat<f64>, Reverse<u64>);

/// Events ordered by ascending timestamp, reverse insertion order on ties.
#[derive(Clone, Debug)]
pub struct EventQueue<K> {
    inner:    BTreeMap<Key, K>,
    next_seq: u64,
}

impl<K> Default for EventQueue<K> {
    fn default() -> Self {
        Self {
            inner:    BTreeMap::new(),
            next_seq: 0,
        }
    }
}

impl<K> EventQueue<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an event at `time` and return its sequence number.
    ///
    /// No check is made that `time` lies in the future; that is the caller's
    /// responsibility.
    pub fn insert(&mut self, time: SimTime, kind: K) -> u64 {
        debug_assert!(!time.0.is_nan(), "event scheduled at NaN");
        let seq = self.next_seq;
        self.next_seq += 1;
        self.inner.insert((OrderedFloat(time.0), Reverse(seq)), kind);
        seq
    }

    /// Remove and return the earliest event, or `None` when the queue is
    /// empty.
    pub fn pop_earliest(&mut self) -> Option<Event<K>> {
        let ((time, Reverse(seq)), kind) = self.inner.pop_first()?;
        Some(Event { time: SimTime(time.0), seq, kind })
    }

    /// Timestamp and kind of the earliest event without removing it.
    pub fn peek(&self) -> Option<(SimTime, &K)> {
        self.inner
            .iter()
            .next()
            .map(|((time, _), kind)| (SimTime(time.0), kind))
    }

    /// Iterate pending events in the order they will be removed.
    pub fn iter(&self) -> impl Iterator<Item = (SimTime, &K)> + '_ {
        self.inner.iter().map(|((time, _), kind)| (SimTime(time.0), kind))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
