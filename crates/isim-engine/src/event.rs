//! A scheduled event.

use isim_core::SimTime;

/// An immutable record in the future event list.
///
/// The queue owns an `Event` from `schedule` until `remove_earliest`, after
/// which it belongs to the driver loop for the duration of dispatch.
#[derive(Clone, Debug, PartialEq)]
pub struct Event<K> {
    /// When the event fires.
    pub time: SimTime,
    /// Insertion sequence number, unique per queue.  Larger means scheduled
    /// later.
    pub seq:  u64,
    /// What happens when the event fires.
    pub kind: K,
}
