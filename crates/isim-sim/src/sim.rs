//! The `Sim` struct and its driver loop.

use isim_core::{SimConfig, SimRng, SimTime};
use isim_model::{Engine, IntersectionState, Outcome, TrafficModel};
use log::{debug, error, info};

use crate::{RunStatistics, SimObserver, SimResult};

/// The simulation runner.
///
/// Holds the engine, the traffic model and the run's RNG, and drives the
/// remove-dispatch loop until the future event list is empty.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config: SimConfig,

    /// Intersection state and handlers.
    pub model: TrafficModel,

    /// Future event list and clock.
    pub engine: Engine,

    pub(crate) rng: SimRng,

    /// Events removed from the engine, whether or not they changed state.
    pub(crate) dispatched: u64,
}

impl Sim {
    /// Run until the event list drains and return the final statistics.
    ///
    /// Stops at the first model error; the observer's `on_sim_end` is not
    /// called in that case.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunStatistics> {
        info!(
            "starting run: horizon {}, seed {}, light {:?}",
            self.config.horizon,
            self.config.seed,
            self.model.params().light
        );
        observer.on_sim_start(&self.config, self.model.params());

        while self.step(observer)?.is_some() {}

        let stats = self.statistics();
        info!(
            "run finished at {}: {} events dispatched, {} handled, {} arrivals, {} still queued",
            stats.end_time,
            stats.events_dispatched,
            stats.events_processed,
            stats.total_arrivals(),
            stats.total_queued(),
        );
        observer.on_sim_end(&stats);
        Ok(stats)
    }

    /// Remove and handle one event.  `Ok(None)` means the run is over.
    ///
    /// Useful for tests and incremental stepping.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<Outcome>> {
        let Some(event) = self.engine.remove_earliest() else {
            return Ok(None);
        };
        self.dispatched += 1;
        let outcome = match self.model.handle(&event, &mut self.engine, &mut self.rng) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("{}: {} failed: {e}", event.time, event.kind);
                return Err(e.into());
            }
        };
        observer.on_event(&event, outcome, self.model.state());
        if self.config.trace {
            debug!("pending {}", self.engine.describe_pending());
        }
        Ok(Some(outcome))
    }

    pub fn now(&self) -> SimTime {
        self.engine.now()
    }

    pub fn state(&self) -> &IntersectionState {
        self.model.state()
    }

    pub fn events_dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Statistics as of now; final once `run` has returned.
    pub fn statistics(&self) -> RunStatistics {
        RunStatistics::collect(
            &self.config,
            self.model.params(),
            self.model.state(),
            self.engine.now(),
            self.dispatched,
        )
    }
}
