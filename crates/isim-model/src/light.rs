//! Traffic-light mode and phase.

use std::fmt;

use crate::{Approach, Street};

/// Whether the intersection has a working signal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LightMode {
    /// Stop signs only: approaches compete for zones, Atlantic ties broken
    /// by a coin flip.
    #[default]
    Uncontrolled,
    /// A two-phase signal alternates between the two streets.
    Signalized,
}

impl LightMode {
    #[inline]
    pub fn is_signalized(self) -> bool {
        self == LightMode::Signalized
    }
}

/// Which street currently has the green light.
///
/// Only consulted in [`LightMode::Signalized`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LightPhase {
    #[default]
    FourteenthGreen,
    AtlanticGreen,
}

impl LightPhase {
    #[inline]
    pub fn green_street(self) -> Street {
        match self {
            LightPhase::FourteenthGreen => Street::Fourteenth,
            LightPhase::AtlanticGreen   => Street::Atlantic,
        }
    }

    #[inline]
    pub fn permits(self, approach: Approach) -> bool {
        approach.street() == self.green_street()
    }
}

impl fmt::Display for LightPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LightPhase::FourteenthGreen => "14th-green",
            LightPhase::AtlanticGreen   => "atlantic-green",
        })
    }
}
