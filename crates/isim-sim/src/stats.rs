//! End-of-run statistics.

use std::fmt;

use isim_core::{SimConfig, SimTime};
use isim_model::{Approach, IntersectionParams, IntersectionState};

/// Final figures for one approach.
#[derive(Clone, Debug, PartialEq)]
pub struct ApproachStats {
    pub approach:           Approach,
    pub arrivals:           u64,
    pub departures:         u64,
    /// Vehicles still waiting or crossing when the run ended.
    pub queued:             usize,
    pub total_waiting_time: f64,
    /// `None` when nothing arrived.
    pub average_wait:       Option<f64>,
}

/// Everything a run reports: the inputs it ran with and the final state.
#[derive(Clone, Debug)]
pub struct RunStatistics {
    pub config:            SimConfig,
    pub params:            IntersectionParams,
    pub end_time:          SimTime,
    pub events_processed:  u64,
    pub events_dispatched: u64,
    pub approaches:        [ApproachStats; Approach::COUNT],
}

impl RunStatistics {
    pub fn collect(
        config:     &SimConfig,
        params:     &IntersectionParams,
        state:      &IntersectionState,
        end_time:   SimTime,
        dispatched: u64,
    ) -> Self {
        let approaches = Approach::ALL.map(|approach| {
            let q = state.queue(approach);
            ApproachStats {
                approach,
                arrivals:           q.arrivals(),
                departures:         q.departures(),
                queued:             q.len(),
                total_waiting_time: q.total_waiting_time(),
                average_wait:       q.average_wait(),
            }
        });
        Self {
            config: config.clone(),
            params: params.clone(),
            end_time,
            events_processed: state.events_processed(),
            events_dispatched: dispatched,
            approaches,
        }
    }

    #[inline]
    pub fn approach(&self, approach: Approach) -> &ApproachStats {
        &self.approaches[approach.index()]
    }

    pub fn total_arrivals(&self) -> u64 {
        self.approaches.iter().map(|a| a.arrivals).sum()
    }

    pub fn total_departures(&self) -> u64 {
        self.approaches.iter().map(|a| a.departures).sum()
    }

    pub fn total_queued(&self) -> usize {
        self.approaches.iter().map(|a| a.queued).sum()
    }
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation statistics (ended {}):", self.end_time)?;
        writeln!(
            f,
            "  {:<11} {:>8} {:>10} {:>7} {:>14} {:>12}",
            "approach", "arrivals", "departures", "queued", "total wait", "average wait"
        )?;
        for s in &self.approaches {
            let avg = s
                .average_wait
                .map_or_else(|| "-".to_string(), |w| format!("{w:.6}"));
            writeln!(
                f,
                "  {:<11} {:>8} {:>10} {:>7} {:>14.6} {:>12}",
                s.approach.code(),
                s.arrivals,
                s.departures,
                s.queued,
                s.total_waiting_time,
                avg
            )?;
        }
        write!(
            f,
            "  events: {} dispatched, {} handled",
            self.events_dispatched, self.events_processed
        )
    }
}
