use isim_core::SimTime;
use log::debug;

use crate::{
    Approach, Engine, EventKind, LightPhase, ModelError, ModelResult, Outcome, TrafficModel,
};

impl TrafficModel {
    /// 14th street gets the green.  Neither light event schedules the next
    /// one at or after the horizon, which is what lets a signalized run drain.
    pub(crate) fn on_light_green(&mut self, now: SimTime, engine: &mut Engine) -> ModelResult<Outcome> {
        self.require_signal(EventKind::LightTurnsGreen)?;
        self.state.phase = LightPhase::FourteenthGreen;
        if now < self.horizon {
            engine.schedule_in(self.params.green_duration, EventKind::LightTurnsRed);
        }
        debug!("{now}: light turns green for 14th street");
        self.release_all(&Approach::FOURTEENTH_RELEASE_ORDER, engine)?;
        Ok(Outcome::Handled)
    }

    pub(crate) fn on_light_red(&mut self, now: SimTime, engine: &mut Engine) -> ModelResult<Outcome> {
        self.require_signal(EventKind::LightTurnsRed)?;
        self.state.phase = LightPhase::AtlanticGreen;
        if now < self.horizon {
            engine.schedule_in(self.params.red_duration, EventKind::LightTurnsGreen);
        }
        debug!("{now}: light turns red for 14th street");
        self.release_all(&Approach::ATLANTIC_RELEASE_ORDER, engine)?;
        Ok(Outcome::Handled)
    }

    fn require_signal(&self, kind: EventKind) -> ModelResult<()> {
        if self.params.light.is_signalized() {
            Ok(())
        } else {
            Err(ModelError::inconsistent(kind, "the intersection has no traffic light"))
        }
    }
}
