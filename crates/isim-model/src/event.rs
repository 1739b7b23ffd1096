//! Event kinds carried by the engine.

use std::fmt;

use crate::{Approach, Movement};

/// What happens when an event fires.  Dispatched by
/// [`TrafficModel::handle`][crate::TrafficModel::handle].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// A vehicle joins the back of `0`'s queue.
    Arrival(Approach),
    /// The head vehicle of `approach` clears the intersection.
    Completion {
        approach: Approach,
        movement: Movement,
    },
    LightTurnsGreen,
    LightTurnsRed,
}

impl EventKind {
    /// The approach the event concerns, if any.
    pub fn approach(&self) -> Option<Approach> {
        match self {
            EventKind::Arrival(a) => Some(*a),
            EventKind::Completion { approach, .. } => Some(*approach),
            EventKind::LightTurnsGreen | EventKind::LightTurnsRed => None,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Arrival(a) => write!(f, "{a} arrival"),
            EventKind::Completion { approach, movement } => write!(f, "{approach} {movement}"),
            EventKind::LightTurnsGreen => f.write_str("light turns green"),
            EventKind::LightTurnsRed => f.write_str("light turns red"),
        }
    }
}
