//! `isim-sim` — the driver loop for the intersection simulator.
//!
//! # Driver loop
//!
//! ```text
//! build:  validate config + params, seed the RNG, bootstrap the model
//! run:    while let Some(event) = engine.remove_earliest():
//!             outcome = model.handle(event)      ── error ⇒ stop, return it
//!             observer.on_event(event, outcome, state)
//!         observer.on_sim_end(stats)
//! ```
//!
//! The loop is strictly sequential: one event is fully handled, and every
//! event it schedules is in the queue, before the next is removed.  It ends
//! when the queue is empty, which happens once arrivals stop at the horizon
//! and the last in-flight vehicle has cleared.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use isim_core::SimConfig;
//! use isim_model::IntersectionParams;
//! use isim_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), IntersectionParams::default()).build()?;
//! let stats = sim.run(&mut NoopObserver)?;
//! println!("{stats}");
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TraceObserver};
pub use sim::Sim;
pub use stats::{ApproachStats, RunStatistics};
