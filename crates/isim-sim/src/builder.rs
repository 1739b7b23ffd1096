//! Fluent builder for constructing a [`Sim`].

use isim_core::{SimConfig, SimRng};
use isim_model::{Engine, IntersectionParams, ModelError, TrafficModel};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — horizon, seed, trace flag
/// - [`IntersectionParams`] — arrival means, light mode and durations
///
/// # Optional inputs (have defaults)
///
/// | Method      | Default                      |
/// |-------------|------------------------------|
/// | `.rng(r)`   | `SimRng::new(config.seed)`   |
pub struct SimBuilder {
    config: SimConfig,
    params: IntersectionParams,
    rng:    Option<SimRng>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, params: IntersectionParams) -> Self {
        Self { config, params, rng: None }
    }

    /// Supply the RNG directly, e.g. a child of an experiment's root RNG.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate inputs, bootstrap the model, and return a ready-to-run
    /// [`Sim`] with the first events already queued.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        self.params.validate().map_err(|e| match e {
            ModelError::InvalidParameter { .. } => SimError::Config(e.to_string()),
            other => SimError::Model(other),
        })?;

        let mut rng = self.rng.unwrap_or_else(|| SimRng::new(self.config.seed));
        let mut engine = Engine::new();
        let mut model = TrafficModel::new(self.params, self.config.horizon_time());
        model.bootstrap(&mut engine, &mut rng);

        Ok(Sim {
            config: self.config,
            model,
            engine,
            rng,
            dispatched: 0,
        })
    }
}
