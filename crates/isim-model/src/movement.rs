//! Turn decisions, the movements they map to, and how long each takes.

use std::fmt;

use isim_core::RandomSource;

/// A driver's turn decision, drawn once per vehicle at arrival.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnDirection {
    Straight,
    Left,
    Right,
}

impl TurnDirection {
    /// Map one uniform draw to a decision: straight 50%, left 25%, right 25%.
    pub fn from_uniform(u: f64) -> Self {
        if u < 0.5 {
            TurnDirection::Straight
        } else if u < 0.75 {
            TurnDirection::Left
        } else {
            TurnDirection::Right
        }
    }

    #[inline]
    pub fn draw<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self::from_uniform(rng.uniform())
    }
}

/// What a vehicle physically does inside the intersection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movement {
    GoAcross,
    TurnLeft,
    TurnRight,
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Movement::GoAcross  => "go-across",
            Movement::TurnLeft  => "turn-left",
            Movement::TurnRight => "turn-right",
        })
    }
}

/// Fixed time a movement occupies its zones.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitTimes {
    pub go_across:  f64,
    pub turn_left:  f64,
    pub turn_right: f64,
}

impl TransitTimes {
    #[inline]
    pub fn duration(&self, movement: Movement) -> f64 {
        match movement {
            Movement::GoAcross  => self.go_across,
            Movement::TurnLeft  => self.turn_left,
            Movement::TurnRight => self.turn_right,
        }
    }
}

impl Default for TransitTimes {
    fn default() -> Self {
        Self {
            go_across:  2.0,
            turn_left:  4.0,
            turn_right: 3.0,
        }
    }
}
