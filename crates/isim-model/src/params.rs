//! Intersection parameters.

use crate::{LightMode, ModelError, Street, TransitTimes};

/// Everything about the intersection a run can vary.
///
/// | Field             | Default | Meaning                                     |
/// |-------------------|---------|---------------------------------------------|
/// | `fourteenth_mean` | 0.1     | Mean inter-arrival time, 14th-street lanes  |
/// | `atlantic_mean`   | 6.0     | Mean inter-arrival time, Atlantic lanes     |
/// | `light`           | off     | `Uncontrolled` or `Signalized`              |
/// | `green_duration`  | 45      | 14th-street green phase                     |
/// | `red_duration`    | 30      | 14th-street red (Atlantic green) phase      |
/// | `transit`         | 2/4/3   | Go-across / turn-left / turn-right times    |
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntersectionParams {
    pub fourteenth_mean: f64,
    pub atlantic_mean:   f64,
    pub light:           LightMode,
    pub green_duration:  f64,
    pub red_duration:    f64,
    pub transit:         TransitTimes,
}

impl Default for IntersectionParams {
    fn default() -> Self {
        Self {
            fourteenth_mean: 0.1,
            atlantic_mean:   6.0,
            light:           LightMode::Uncontrolled,
            green_duration:  45.0,
            red_duration:    30.0,
            transit:         TransitTimes::default(),
        }
    }
}

impl IntersectionParams {
    /// Mean inter-arrival time for approaches on `street`.
    #[inline]
    pub fn mean_interarrival(&self, street: Street) -> f64 {
        match street {
            Street::Fourteenth => self.fourteenth_mean,
            Street::Atlantic   => self.atlantic_mean,
        }
    }

    /// Every mean and duration must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), ModelError> {
        let checks = [
            ("fourteenth mean inter-arrival time", self.fourteenth_mean),
            ("atlantic mean inter-arrival time", self.atlantic_mean),
            ("green light duration", self.green_duration),
            ("red light duration", self.red_duration),
            ("go-across time", self.transit.go_across),
            ("turn-left time", self.transit.turn_left),
            ("turn-right time", self.transit.turn_right),
        ];
        for (what, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(ModelError::InvalidParameter { what, value });
            }
        }
        Ok(())
    }
}
