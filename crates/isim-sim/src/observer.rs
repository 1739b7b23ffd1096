//! Simulation observer trait for tracing and data collection.

use isim_core::SimConfig;
use isim_engine::Event;
use isim_model::{Approach, EventKind, IntersectionParams, IntersectionState, Outcome};
use log::debug;

use crate::RunStatistics;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait SimObserver {
    /// Called once before the first event is removed.
    fn on_sim_start(&mut self, _config: &SimConfig, _params: &IntersectionParams) {}

    /// Called after every event, with the state as the handler left it.
    fn on_event(
        &mut self,
        _event:   &Event<EventKind>,
        _outcome: Outcome,
        _state:   &IntersectionState,
    ) {}

    /// Called once after the event list drains.
    fn on_sim_end(&mut self, _stats: &RunStatistics) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Logs one `debug!` line per event: time, kind, outcome, queue lengths and
/// zone flags.
///
/// The format is for humans reading a trace and is not stable.
#[derive(Default)]
pub struct TraceObserver {
    lines: u64,
}

impl TraceObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events traced so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }
}

impl SimObserver for TraceObserver {
    fn on_event(&mut self, event: &Event<EventKind>, outcome: Outcome, state: &IntersectionState) {
        self.lines += 1;
        let queues = Approach::ALL
            .iter()
            .map(|a| format!("{a}={}", state.queue(*a).len()))
            .collect::<Vec<_>>()
            .join(" ");
        let zones: String = state
            .zones()
            .free_flags()
            .iter()
            .map(|free| if *free { '.' } else { '#' })
            .collect();
        let note = match outcome {
            Outcome::Handled => "",
            Outcome::AlreadyHandled => " (already handled)",
        };
        debug!(
            "{} {}{note} | {queues} | zones NSEW {zones} | {}",
            event.time,
            event.kind,
            state.phase()
        );
    }

    fn on_sim_end(&mut self, stats: &RunStatistics) {
        debug!("trace complete: {} events at {}", self.lines, stats.end_time);
    }
}
