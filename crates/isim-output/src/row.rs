//! The per-run output row.

use isim_model::{Approach, LightMode};
use isim_sim::RunStatistics;
use serde::{Deserialize, Serialize};

/// One line of an experiment file.
///
/// Column names match the ones the analysis notebooks read, e.g.
/// `Num Cars N14E` and `Avg Wait S Atlantic N`.  An average wait is left
/// empty when the approach had no arrivals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    #[serde(rename = "14th Mean Arrival")]
    pub fourteenth_mean: f64,
    #[serde(rename = "Atlantic Mean Arrival")]
    pub atlantic_mean:   f64,
    #[serde(rename = "Traffic Light", with = "title_bool")]
    pub traffic_light:   bool,
    #[serde(rename = "Green Light")]
    pub green_duration:  f64,
    #[serde(rename = "Red Light")]
    pub red_duration:    f64,

    #[serde(rename = "Num Cars N14E")]
    pub arrivals_n14e:        u64,
    #[serde(rename = "Num Cars S14E")]
    pub arrivals_s14e:        u64,
    #[serde(rename = "Num Cars EN14W")]
    pub arrivals_en14w:       u64,
    #[serde(rename = "Num Cars ES14W")]
    pub arrivals_es14w:       u64,
    #[serde(rename = "Num Cars N Atlantic S")]
    pub arrivals_natlantic_s: u64,
    #[serde(rename = "Num Cars S Atlantic N")]
    pub arrivals_satlantic_n: u64,

    #[serde(rename = "Avg Wait N14E")]
    pub avg_wait_n14e:        Option<f64>,
    #[serde(rename = "Avg Wait S14E")]
    pub avg_wait_s14e:        Option<f64>,
    #[serde(rename = "Avg Wait EN14W")]
    pub avg_wait_en14w:       Option<f64>,
    #[serde(rename = "Avg Wait ES14W")]
    pub avg_wait_es14w:       Option<f64>,
    #[serde(rename = "Avg Wait N Atlantic S")]
    pub avg_wait_natlantic_s: Option<f64>,
    #[serde(rename = "Avg Wait S Atlantic N")]
    pub avg_wait_satlantic_n: Option<f64>,
}

impl RunRecord {
    pub fn from_stats(stats: &RunStatistics) -> Self {
        let arrivals = |a: Approach| stats.approach(a).arrivals;
        let wait = |a: Approach| stats.approach(a).average_wait;
        let p = &stats.params;
        Self {
            fourteenth_mean: p.fourteenth_mean,
            atlantic_mean:   p.atlantic_mean,
            traffic_light:   p.light == LightMode::Signalized,
            green_duration:  p.green_duration,
            red_duration:    p.red_duration,

            arrivals_n14e:        arrivals(Approach::North14East),
            arrivals_s14e:        arrivals(Approach::South14East),
            arrivals_en14w:       arrivals(Approach::EastNorth14West),
            arrivals_es14w:       arrivals(Approach::EastSouth14West),
            arrivals_natlantic_s: arrivals(Approach::NorthAtlanticSouth),
            arrivals_satlantic_n: arrivals(Approach::SouthAtlanticNorth),

            avg_wait_n14e:        wait(Approach::North14East),
            avg_wait_s14e:        wait(Approach::South14East),
            avg_wait_en14w:       wait(Approach::EastNorth14West),
            avg_wait_es14w:       wait(Approach::EastSouth14West),
            avg_wait_natlantic_s: wait(Approach::NorthAtlanticSouth),
            avg_wait_satlantic_n: wait(Approach::SouthAtlanticNorth),
        }
    }

    pub fn arrivals(&self, approach: Approach) -> u64 {
        match approach {
            Approach::North14East        => self.arrivals_n14e,
            Approach::South14East        => self.arrivals_s14e,
            Approach::EastNorth14West    => self.arrivals_en14w,
            Approach::EastSouth14West    => self.arrivals_es14w,
            Approach::NorthAtlanticSouth => self.arrivals_natlantic_s,
            Approach::SouthAtlanticNorth => self.arrivals_satlantic_n,
        }
    }

    pub fn average_wait(&self, approach: Approach) -> Option<f64> {
        match approach {
            Approach::North14East        => self.avg_wait_n14e,
            Approach::South14East        => self.avg_wait_s14e,
            Approach::EastNorth14West    => self.avg_wait_en14w,
            Approach::EastSouth14West    => self.avg_wait_es14w,
            Approach::NorthAtlanticSouth => self.avg_wait_natlantic_s,
            Approach::SouthAtlanticNorth => self.avg_wait_satlantic_n,
        }
    }
}

/// `True`/`False` on output; accepts the usual spellings on input.
mod title_bool {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(if *value { "True" } else { "False" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(d)?;
        match raw.trim() {
            "True" | "true" | "TRUE" | "T" | "t" | "1" => Ok(true),
            "False" | "false" | "FALSE" | "F" | "f" | "0" => Ok(false),
            other => Err(de::Error::custom(format!("not a boolean: {other:?}"))),
        }
    }
}
