//! The shared mutable world the handlers operate on.

use crate::{Approach, ApproachQueue, LightPhase, ZoneBoard};

/// Queues, zone holders and light phase for one run.
///
/// Created with every zone free, the light green for 14th street and all
/// queues empty.  Only [`TrafficModel`][crate::TrafficModel] handlers mutate
/// it, one event at a time.
#[derive(Clone, Debug)]
pub struct IntersectionState {
    queues: [ApproachQueue; Approach::COUNT],
    pub(crate) zones: ZoneBoard,
    pub(crate) phase: LightPhase,
    pub(crate) events_processed: u64,
}

impl Default for IntersectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl IntersectionState {
    pub fn new() -> Self {
        Self {
            queues:           Approach::ALL.map(ApproachQueue::new),
            zones:            ZoneBoard::new(),
            phase:            LightPhase::default(),
            events_processed: 0,
        }
    }

    #[inline]
    pub fn queue(&self, approach: Approach) -> &ApproachQueue {
        &self.queues[approach.index()]
    }

    #[inline]
    pub(crate) fn queue_mut(&mut self, approach: Approach) -> &mut ApproachQueue {
        &mut self.queues[approach.index()]
    }

    pub fn queues(&self) -> &[ApproachQueue; Approach::COUNT] {
        &self.queues
    }

    pub fn zones(&self) -> &ZoneBoard {
        &self.zones
    }

    pub fn phase(&self) -> LightPhase {
        self.phase
    }

    /// Events that changed state.  Completions found already handled are not
    /// counted.
    pub fn events_processed(&self) -> u64 {
        self.events_processed
    }

    pub fn queue_lengths(&self) -> [usize; Approach::COUNT] {
        self.queues.each_ref().map(ApproachQueue::len)
    }

    pub fn total_arrivals(&self) -> u64 {
        self.queues.iter().map(ApproachQueue::arrivals).sum()
    }

    pub fn total_departures(&self) -> u64 {
        self.queues.iter().map(ApproachQueue::departures).sum()
    }

    /// Vehicles still waiting or crossing.
    pub fn vehicles_present(&self) -> usize {
        self.queues.iter().map(ApproachQueue::len).sum()
    }
}
