//! `TrafficModel` — owns the intersection state and dispatches events.

use isim_core::{RandomSource, SimTime};
use isim_engine::{Event, SimulationEngine};
use log::debug;

use crate::{Approach, EventKind, IntersectionParams, IntersectionState, ModelResult};

/// The engine specialised to intersection events.
pub type Engine = SimulationEngine<EventKind>;

/// What a handler did with an event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Handled,
    /// A completion found its approach queue already empty; nothing changed.
    AlreadyHandled,
}

/// The intersection traffic model.
///
/// Call [`bootstrap`](Self::bootstrap) once to seed the engine, then pass
/// every removed event to [`handle`](Self::handle) until the engine is empty.
#[derive(Clone, Debug)]
pub struct TrafficModel {
    pub(crate) params:  IntersectionParams,
    pub(crate) horizon: SimTime,
    pub(crate) state:   IntersectionState,
}

impl TrafficModel {
    /// `horizon` is the time after which no further arrivals are scheduled.
    pub fn new(params: IntersectionParams, horizon: SimTime) -> Self {
        Self {
            params,
            horizon,
            state: IntersectionState::new(),
        }
    }

    pub fn params(&self) -> &IntersectionParams {
        &self.params
    }

    pub fn horizon(&self) -> SimTime {
        self.horizon
    }

    pub fn state(&self) -> &IntersectionState {
        &self.state
    }

    pub fn into_state(self) -> IntersectionState {
        self.state
    }

    /// Schedule the first light change (signalized mode only) and the first
    /// arrival.
    pub fn bootstrap<R: RandomSource + ?Sized>(&mut self, engine: &mut Engine, rng: &mut R) {
        if self.params.light.is_signalized() {
            engine.schedule_in(self.params.green_duration, EventKind::LightTurnsRed);
        }
        self.schedule_next_arrival(engine, rng);
        debug!(
            "bootstrapped {:?} intersection, {} event(s) pending",
            self.params.light,
            engine.size()
        );
    }

    /// Apply one event removed from `engine`.
    ///
    /// Any error is an internal-consistency violation and the run must stop.
    pub fn handle<R: RandomSource + ?Sized>(
        &mut self,
        event:  &Event<EventKind>,
        engine: &mut Engine,
        rng:    &mut R,
    ) -> ModelResult<Outcome> {
        let now = event.time;
        let outcome = match event.kind {
            EventKind::Arrival(approach) => self.on_arrival(approach, now, engine, rng)?,
            EventKind::Completion { approach, movement } => {
                self.on_completion(approach, movement, now, engine, rng)?
            }
            EventKind::LightTurnsGreen => self.on_light_green(now, engine)?,
            EventKind::LightTurnsRed => self.on_light_red(now, engine)?,
        };
        if outcome == Outcome::Handled {
            self.state.events_processed += 1;
        }
        Ok(outcome)
    }

    /// Draw the approach and delay of the next arrival and schedule it.
    pub(crate) fn schedule_next_arrival<R: RandomSource + ?Sized>(
        &self,
        engine: &mut Engine,
        rng:    &mut R,
    ) {
        let index = rng
            .weighted_index(&crate::ARRIVAL_WEIGHTS)
            .unwrap_or_default();
        let approach = Approach::ALL[index];
        let delay = rng.exponential(self.params.mean_interarrival(approach.street()));
        engine.schedule_in(delay, EventKind::Arrival(approach));
    }
}
