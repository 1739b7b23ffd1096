use isim_core::{RandomSource, SimTime};
use log::trace;

use crate::{Approach, Engine, ModelResult, Outcome, TrafficModel, TurnDirection};

impl TrafficModel {
    pub(crate) fn on_arrival<R: RandomSource + ?Sized>(
        &mut self,
        approach: Approach,
        now:      SimTime,
        engine:   &mut Engine,
        rng:      &mut R,
    ) -> ModelResult<Outcome> {
        if now < self.horizon {
            self.schedule_next_arrival(engine, rng);
        }

        let movement = approach.movement_for(TurnDirection::draw(rng));
        let queue = self.state.queue_mut(approach);
        let vehicle = queue.arrive(movement, now);
        trace!("{now}: {vehicle} arrives for {movement}, {} queued", queue.len());

        if queue.len() == 1 {
            self.try_dispatch(approach, engine)?;
        }
        Ok(Outcome::Handled)
    }
}
