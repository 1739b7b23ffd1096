use isim_core::{RandomSource, SimTime};
use log::trace;

use crate::{
    footprint, Approach, Engine, LightMode, ModelError, ModelResult, Movement, Outcome,
    TrafficModel,
};

impl TrafficModel {
    pub(crate) fn on_completion<R: RandomSource + ?Sized>(
        &mut self,
        approach: Approach,
        movement: Movement,
        now:      SimTime,
        engine:   &mut Engine,
        rng:      &mut R,
    ) -> ModelResult<Outcome> {
        // An earlier event may already have emptied this queue.
        if self.state.queue(approach).is_empty() {
            return Ok(Outcome::AlreadyHandled);
        }

        let zones = footprint(approach, movement, self.params.light).ok_or_else(|| {
            ModelError::inconsistent("completion", format!("{approach} never performs a {movement}"))
        })?;
        let vehicle = self.state.queue_mut(approach).depart(movement, now)?;
        self.state.zones.release(zones, approach)?;
        trace!(
            "{now}: {vehicle} clears {zones} after {:.3} in the system",
            now.since(vehicle.arrived_at)
        );

        self.release_cascade(approach, engine, rng)?;
        Ok(Outcome::Handled)
    }

    /// Offer the intersection to every approach after zones were freed.
    ///
    /// The completing approach goes first, then 14th street, then Atlantic.
    /// Without a signal, when both Atlantic heads are waiting a coin flip
    /// decides which is offered first.
    fn release_cascade<R: RandomSource + ?Sized>(
        &mut self,
        completed: Approach,
        engine:    &mut Engine,
        rng:       &mut R,
    ) -> ModelResult<()> {
        self.try_dispatch(completed, engine)?;
        self.release_all(&Approach::FOURTEENTH_RELEASE_ORDER, engine)?;

        let mut atlantic = Approach::ATLANTIC_RELEASE_ORDER;
        let contested = self.params.light == LightMode::Uncontrolled
            && atlantic.iter().all(|a| self.state.queue(*a).has_waiting_head());
        if contested && !rng.coin_flip() {
            atlantic.reverse();
        }
        self.release_all(&atlantic, engine)
    }
}
