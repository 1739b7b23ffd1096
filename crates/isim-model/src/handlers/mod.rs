//! Event handlers, one `impl TrafficModel` block per concern.

mod arrival;
mod completion;
mod dispatch;
mod signal;
