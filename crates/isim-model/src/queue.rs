//! Per-approach FIFO of waiting vehicles and its statistics.

use std::collections::VecDeque;
use std::fmt;

use isim_core::{SimTime, VehicleId};

use crate::{Approach, ModelError, ModelResult, Movement};

/// A vehicle waiting at (or crossing from) an approach.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vehicle {
    pub id:         VehicleId,
    pub approach:   Approach,
    /// Drawn at arrival; fixed for the vehicle's lifetime.
    pub movement:   Movement,
    pub arrived_at: SimTime,
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-car-{}", self.approach.vehicle_prefix(), self.id.get())
    }
}

/// Vehicles queued on one approach, head first.
///
/// The head is the only vehicle that can be in the intersection; while it is,
/// `in_flight` holds its movement.
///
/// # Waiting time
///
/// After every change to the queue, `total_waiting_time` grows by the number
/// of vehicles behind the head times the time since the last change:
/// `(len − 1) × (now − last_event_time)`, or nothing when `len ≤ 1`.
///
/// An approach whose queue never holds more than one vehicle therefore
/// accumulates exactly zero.
#[derive(Clone, Debug)]
pub struct ApproachQueue {
    approach:           Approach,
    vehicles:           VecDeque<Vehicle>,
    in_flight:          Option<Movement>,
    arrivals:           u64,
    departures:         u64,
    total_waiting_time: f64,
    last_event_time:    SimTime,
}

impl ApproachQueue {
    pub fn new(approach: Approach) -> Self {
        Self {
            approach,
            vehicles:           VecDeque::new(),
            in_flight:          None,
            arrivals:           0,
            departures:         0,
            total_waiting_time: 0.0,
            last_event_time:    SimTime::ZERO,
        }
    }

    #[inline]
    pub fn approach(&self) -> Approach {
        self.approach
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    #[inline]
    pub fn head(&self) -> Option<&Vehicle> {
        self.vehicles.front()
    }

    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    #[inline]
    pub fn in_flight(&self) -> Option<Movement> {
        self.in_flight
    }

    /// `true` when a head vehicle is waiting with nothing in flight.
    #[inline]
    pub fn has_waiting_head(&self) -> bool {
        self.in_flight.is_none() && !self.vehicles.is_empty()
    }

    pub fn arrivals(&self) -> u64 {
        self.arrivals
    }

    pub fn departures(&self) -> u64 {
        self.departures
    }

    pub fn total_waiting_time(&self) -> f64 {
        self.total_waiting_time
    }

    pub fn last_event_time(&self) -> SimTime {
        self.last_event_time
    }

    /// `total_waiting_time / arrivals`, or `None` before the first arrival.
    pub fn average_wait(&self) -> Option<f64> {
        (self.arrivals > 0).then(|| self.total_waiting_time / self.arrivals as f64)
    }

    /// Append a new vehicle performing `movement` and return it.
    pub fn arrive(&mut self, movement: Movement, now: SimTime) -> Vehicle {
        self.arrivals += 1;
        let vehicle = Vehicle {
            id:         VehicleId(self.arrivals),
            approach:   self.approach,
            movement,
            arrived_at: now,
        };
        self.vehicles.push_back(vehicle);
        self.accumulate(now);
        vehicle
    }

    /// Mark the head vehicle as entering the intersection.
    pub(crate) fn begin_service(&mut self) -> ModelResult<Movement> {
        let Some(head) = self.vehicles.front() else {
            return Err(ModelError::inconsistent(
                "dispatch",
                format!("{} has no vehicle to dispatch", self.approach),
            ));
        };
        if let Some(busy) = self.in_flight {
            return Err(ModelError::inconsistent(
                "dispatch",
                format!("{} already has a {busy} in flight", self.approach),
            ));
        }
        self.in_flight = Some(head.movement);
        Ok(head.movement)
    }

    /// Remove the head vehicle, which must be in flight performing `movement`.
    pub(crate) fn depart(&mut self, movement: Movement, now: SimTime) -> ModelResult<Vehicle> {
        if self.in_flight != Some(movement) {
            return Err(ModelError::inconsistent(
                "completion",
                format!(
                    "{} completed a {movement} but has {} in flight",
                    self.approach,
                    self.in_flight.map_or_else(|| "nothing".to_string(), |m| m.to_string()),
                ),
            ));
        }
        let Some(vehicle) = self.vehicles.pop_front() else {
            return Err(ModelError::inconsistent(
                "completion",
                format!("{} has a movement in flight but an empty queue", self.approach),
            ));
        };
        self.in_flight = None;
        self.departures += 1;
        self.accumulate(now);
        Ok(vehicle)
    }

    fn accumulate(&mut self, now: SimTime) {
        let behind_head = self.vehicles.len().saturating_sub(1);
        self.total_waiting_time += behind_head as f64 * now.since(self.last_event_time);
        self.last_event_time = now;
    }
}
