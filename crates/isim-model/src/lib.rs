//! `isim-model` — the intersection traffic model.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`approach`] | `Approach` (six flows), `Street`, arrival weights            |
//! | [`movement`] | `TurnDirection`, `Movement`, `TransitTimes`                  |
//! | [`zone`]     | `Zone`, `ZoneSet`, `ZoneBoard`, movement footprints          |
//! | [`light`]    | `LightMode`, `LightPhase`                                    |
//! | [`queue`]    | `Vehicle`, `ApproachQueue`                                   |
//! | [`state`]    | `IntersectionState`                                          |
//! | [`event`]    | `EventKind` — the tagged union the engine carries            |
//! | [`params`]   | `IntersectionParams`                                         |
//! | [`model`]    | `TrafficModel` — bootstrap and event dispatch                |
//! | [`error`]    | `ModelError`, `ModelResult<T>`                               |
//!
//! # Event flow
//!
//! ```text
//! Arrival(a)            ─► enqueue on a, schedule next arrival, draw movement,
//!                          dispatch head of a if free
//! Completion(a, m)      ─► dequeue head of a, release footprint of m,
//!                          release cascade over all approaches
//! LightTurnsGreen/Red   ─► flip phase, schedule the opposite transition before
//!                          the horizon,
//!                          release the approaches the new phase permits
//! ```
//!
//! "Dispatch" means: the approach has a waiting head vehicle, nothing in
//! flight, the light (if any) permits it, and every zone of the head's
//! footprint is free.  Checking and claiming happen inside one handler call.

pub mod approach;
pub mod error;
pub mod event;
pub mod light;
pub mod model;
pub mod movement;
pub mod params;
pub mod queue;
pub mod state;
pub mod zone;

mod handlers;

#[cfg(test)]
mod tests;

pub use approach::{Approach, Street, ARRIVAL_WEIGHTS};
pub use error::{ModelError, ModelResult};
pub use event::EventKind;
pub use light::{LightMode, LightPhase};
pub use model::{Engine, Outcome, TrafficModel};
pub use movement::{Movement, TransitTimes, TurnDirection};
pub use params::IntersectionParams;
pub use queue::{ApproachQueue, Vehicle};
pub use state::IntersectionState;
pub use zone::{footprint, Zone, ZoneBoard, ZoneSet};
