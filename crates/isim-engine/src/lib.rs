//! `isim-engine` — the generic discrete-event engine.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`event`]  | `Event<K>` — timestamp, insertion sequence, kind         |
//! | [`queue`]  | `EventQueue<K>` (`BTreeMap<(time, Reverse(seq)), K>`)    |
//! | [`engine`] | `SimulationEngine<K>` — queue + clock                    |
//!
//! The engine knows nothing about intersections: `K` is whatever tagged
//! union the model layer dispatches on.
//!
//! # Ordering
//!
//! Events leave the queue in ascending timestamp order.  Two events with the
//! same timestamp leave in *reverse* insertion order: the one scheduled last
//! is removed first.
//!
//! ```text
//! schedule(5.0, A); schedule(5.0, B); schedule(1.0, C)
//! remove_earliest() → C, B, A
//! ```

pub mod engine;
pub mod event;
pub mod queue;


pub use engine::SimulationEngine;
pub use event::Event;
pub use queue::EventQueue;
