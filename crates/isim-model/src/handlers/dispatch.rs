use log::trace;

use crate::{footprint, Approach, Engine, EventKind, ModelError, ModelResult, TrafficModel};

impl TrafficModel {
    /// Send the head vehicle of `approach` into the intersection if it can
    /// go.  Returns whether it went.
    ///
    /// The zone check and the claim happen together, so no other dispatch
    /// can slip in between them.
    pub(crate) fn try_dispatch(&mut self, approach: Approach, engine: &mut Engine) -> ModelResult<bool> {
        let queue = self.state.queue(approach);
        let Some(head) = queue.head() else {
            return Ok(false);
        };
        if queue.in_flight().is_some() {
            return Ok(false);
        }
        let light = self.params.light;
        if light.is_signalized() && !self.state.phase.permits(approach) {
            return Ok(false);
        }

        let movement = head.movement;
        let zones = footprint(approach, movement, light).ok_or_else(|| {
            ModelError::inconsistent("dispatch", format!("{approach} never performs a {movement}"))
        })?;
        if !self.state.zones.all_free(zones) {
            return Ok(false);
        }

        self.state.zones.claim(zones, approach)?;
        self.state.queue_mut(approach).begin_service()?;
        let delay = self.params.transit.duration(movement);
        engine.schedule_in(delay, EventKind::Completion { approach, movement });
        trace!("{}: {approach} dispatches {movement} holding {zones}", engine.now());
        Ok(true)
    }

    pub(crate) fn release_all(&mut self, approaches: &[Approach], engine: &mut Engine) -> ModelResult<()> {
        for &approach in approaches {
            self.try_dispatch(approach, engine)?;
        }
        Ok(())
    }
}
