//! Intersection quadrants and mutual exclusion between movements.
//!
//! A movement occupies a fixed set of quadrants (its *footprint*) from
//! dispatch until completion.  [`ZoneBoard`] records which approach holds
//! each quadrant, so two in-flight movements can never share one.

use std::fmt;

use crate::{Approach, LightMode, ModelError, ModelResult, Movement, Street};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Zone {
    North,
    South,
    East,
    West,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::North, Zone::South, Zone::East, Zone::West];

    #[inline]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Zone::North => "north",
            Zone::South => "south",
            Zone::East  => "east",
            Zone::West  => "west",
        })
    }
}

// ── ZoneSet ───────────────────────────────────────────────────────────────────

/// A small set of zones, stored as a bitmask.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct ZoneSet(u8);

impl ZoneSet {
    pub const EMPTY: ZoneSet = ZoneSet(0);

    pub fn of(zones: &[Zone]) -> Self {
        ZoneSet(zones.iter().fold(0, |acc, z| acc | z.bit()))
    }

    #[inline]
    pub fn contains(self, zone: Zone) -> bool {
        self.0 & zone.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Zone> {
        Zone::ALL.into_iter().filter(move |z| self.contains(*z))
    }
}

impl fmt::Display for ZoneSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, zone) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{zone}")?;
        }
        write!(f, "}}")
    }
}

// ── Footprints ────────────────────────────────────────────────────────────────

/// Zones `approach` occupies while performing `movement`.
///
/// 14th-street footprints are the same in both light modes.  With a signal,
/// Atlantic traffic runs while 14th street is stopped and uses the east and
/// west quadrants; without one it has to cut across the north and south
/// quadrants that 14th-street traffic also uses.
///
/// Returns `None` if the approach never performs `movement`.
pub fn footprint(approach: Approach, movement: Movement, mode: LightMode) -> Option<ZoneSet> {
    use Approach::*;
    use Movement::*;
    use Zone::*;

    let zones: &[Zone] = match (approach, movement) {
        (North14East, GoAcross)      => &[South],
        (North14East, TurnLeft)      => &[North],
        (South14East, GoAcross)      => &[South],
        (South14East, TurnRight)     => &[South],
        (EastNorth14West, GoAcross)  => &[North],
        (EastNorth14West, TurnRight) => &[North],
        (EastSouth14West, GoAcross)  => &[North],
        (EastSouth14West, TurnLeft)  => &[South],

        (NorthAtlanticSouth | SouthAtlanticNorth, _) => {
            return Some(atlantic_footprint(approach, movement, mode));
        }
        _ => return None,
    };
    Some(ZoneSet::of(zones))
}

fn atlantic_footprint(approach: Approach, movement: Movement, mode: LightMode) -> ZoneSet {
    use Movement::*;
    use Zone::*;

    debug_assert_eq!(approach.street(), Street::Atlantic);
    let southbound = approach == Approach::NorthAtlanticSouth;
    let zones: &[Zone] = match (mode, movement) {
        (LightMode::Uncontrolled, GoAcross | TurnLeft) => &[North, South],
        (LightMode::Uncontrolled, TurnRight) if southbound => &[North],
        (LightMode::Uncontrolled, TurnRight) => &[South],

        (LightMode::Signalized, GoAcross | TurnRight) if southbound => &[West],
        (LightMode::Signalized, TurnLeft) if southbound => &[East],
        (LightMode::Signalized, GoAcross | TurnRight) => &[East],
        (LightMode::Signalized, TurnLeft) => &[West],
    };
    ZoneSet::of(zones)
}

// ── ZoneBoard ─────────────────────────────────────────────────────────────────

/// Which approach, if any, currently holds each zone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ZoneBoard {
    holders: [Option<Approach>; 4],
}

impl ZoneBoard {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn holder(&self, zone: Zone) -> Option<Approach> {
        self.holders[zone as usize]
    }

    #[inline]
    pub fn is_free(&self, zone: Zone) -> bool {
        self.holder(zone).is_none()
    }

    pub fn all_free(&self, zones: ZoneSet) -> bool {
        zones.iter().all(|z| self.is_free(z))
    }

    /// Free flags in `Zone::ALL` order.
    pub fn free_flags(&self) -> [bool; 4] {
        Zone::ALL.map(|z| self.is_free(z))
    }

    /// Claim every zone in `zones` for `claimant`, or none of them.
    pub fn claim(&mut self, zones: ZoneSet, claimant: Approach) -> ModelResult<()> {
        if let Some((zone, holder)) = zones
            .iter()
            .find_map(|z| self.holder(z).map(|h| (z, h)))
        {
            return Err(ModelError::ZoneConflict { zone, holder, claimant });
        }
        for zone in zones.iter() {
            self.holders[zone as usize] = Some(claimant);
        }
        Ok(())
    }

    /// Release every zone in `zones`; each must be held by `approach`.
    pub fn release(&mut self, zones: ZoneSet, approach: Approach) -> ModelResult<()> {
        if let Some(zone) = zones.iter().find(|z| self.holder(*z) != Some(approach)) {
            return Err(ModelError::ZoneNotHeld { zone, approach });
        }
        for zone in zones.iter() {
            self.holders[zone as usize] = None;
        }
        Ok(())
    }
}
