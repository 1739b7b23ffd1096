//! The six traffic approaches into the intersection.
//!
//! Four approaches run along 14th street and two along Atlantic:
//!
//! | Approach             | Code         | Street     | Arrival weight |
//! |----------------------|--------------|------------|----------------|
//! | `North14East`        | `N14E`       | Fourteenth | 49             |
//! | `South14East`        | `S14E`       | Fourteenth | 50             |
//! | `EastNorth14West`    | `EN14W`      | Fourteenth | 50             |
//! | `EastSouth14West`    | `ES14W`      | Fourteenth | 50             |
//! | `NorthAtlanticSouth` | `NAtlanticS` | Atlantic   | 13             |
//! | `SouthAtlanticNorth` | `SAtlanticN` | Atlantic   | 13             |

use std::fmt;

use crate::{Movement, TurnDirection};

/// Relative arrival frequency of each approach, indexed by
/// [`Approach::index`].  Sums to 225.
pub const ARRIVAL_WEIGHTS: [u32; Approach::COUNT] = [49, 50, 50, 50, 13, 13];

/// Which street an approach belongs to.  Each street has its own mean
/// inter-arrival time and its own light phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Street {
    Fourteenth,
    Atlantic,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Approach {
    North14East,
    South14East,
    EastNorth14West,
    EastSouth14West,
    NorthAtlanticSouth,
    SouthAtlanticNorth,
}

impl Approach {
    pub const COUNT: usize = 6;

    /// All approaches in index order.
    pub const ALL: [Approach; Approach::COUNT] = [
        Approach::North14East,
        Approach::South14East,
        Approach::EastNorth14West,
        Approach::EastSouth14West,
        Approach::NorthAtlanticSouth,
        Approach::SouthAtlanticNorth,
    ];

    /// 14th-street approaches in release order.
    pub const FOURTEENTH_RELEASE_ORDER: [Approach; 4] = [
        Approach::EastSouth14West,
        Approach::EastNorth14West,
        Approach::North14East,
        Approach::South14East,
    ];

    /// Atlantic approaches in default release order.
    pub const ATLANTIC_RELEASE_ORDER: [Approach; 2] =
        [Approach::NorthAtlanticSouth, Approach::SouthAtlanticNorth];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn street(self) -> Street {
        match self {
            Approach::NorthAtlanticSouth | Approach::SouthAtlanticNorth => Street::Atlantic,
            _ => Street::Fourteenth,
        }
    }

    /// Short upper-case code used in output column headers.
    pub fn code(self) -> &'static str {
        match self {
            Approach::North14East        => "N14E",
            Approach::South14East        => "S14E",
            Approach::EastNorth14West    => "EN14W",
            Approach::EastSouth14West    => "ES14W",
            Approach::NorthAtlanticSouth => "NAtlanticS",
            Approach::SouthAtlanticNorth => "SAtlanticN",
        }
    }

    /// Lower-case prefix for vehicle names, e.g. `n14e-car-7`.
    pub fn vehicle_prefix(self) -> &'static str {
        match self {
            Approach::North14East        => "n14e",
            Approach::South14East        => "s14e",
            Approach::EastNorth14West    => "en14w",
            Approach::EastSouth14West    => "es14w",
            Approach::NorthAtlanticSouth => "natlantics",
            Approach::SouthAtlanticNorth => "satlanticn",
        }
    }

    /// The movement a driver on this approach makes for a turn decision.
    ///
    /// Lanes on 14th street cannot turn towards the curb side, so a turn
    /// that way continues straight across instead.
    pub fn movement_for(self, turn: TurnDirection) -> Movement {
        use Approach::*;
        use TurnDirection::*;
        match (self, turn) {
            (_, Straight) => Movement::GoAcross,
            (North14East | EastSouth14West, Left) => Movement::TurnLeft,
            (North14East | EastSouth14West, Right) => Movement::GoAcross,
            (South14East | EastNorth14West, Left) => Movement::GoAcross,
            (South14East | EastNorth14West, Right) => Movement::TurnRight,
            (NorthAtlanticSouth | SouthAtlanticNorth, Left) => Movement::TurnLeft,
            (NorthAtlanticSouth | SouthAtlanticNorth, Right) => Movement::TurnRight,
        }
    }

    /// Whether this approach ever performs `movement`.
    pub fn allows(self, movement: Movement) -> bool {
        [TurnDirection::Straight, TurnDirection::Left, TurnDirection::Right]
            .into_iter()
            .any(|turn| self.movement_for(turn) == movement)
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
