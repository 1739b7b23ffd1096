//! `isim-core` — foundational types for the `isim` intersection simulator.
//!
//! This crate is a dependency of every other `isim-*` crate.  It has no
//! `isim-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                            |
//! |-----------|-----------------------------------------------------|
//! | [`ids`]   | `VehicleId`                                         |
//! | [`time`]  | `SimTime`, `SimClock`, `SimConfig`                  |
//! | [`rng`]   | `RandomSource` trait, `SimRng`                      |
//! | [`error`] | `CoreError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::VehicleId;
pub use rng::{RandomSource, SimRng};
pub use time::{SimClock, SimConfig, SimTime};
