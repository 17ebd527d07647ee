//! Tick kinds and opaque host event identifiers.

use serde::{Deserialize, Serialize};

/// Opaque host-side identifier for a resolvable named event.
///
/// The host assigns these when it builds its event table; chime never
/// inspects the value, it only hands it back when reserving the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventHandle(pub u32);

impl EventHandle {
    /// Return the inner host-assigned value.
    pub const fn into_inner(self) -> u32 {
        self.0
    }
}

/// One row of the host's event table: a name and the handle it resolves
/// to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEntry {
    /// The event's name as registered with the host. Compared by exact,
    /// case-sensitive equality during binding resolution.
    pub name: String,
    /// The host's opaque handle for this event.
    pub handle: EventHandle,
}

/// Classification of one minute-boundary tick.
///
/// Every tick is exactly one of these. When several thresholds coincide
/// (the top of the configured day crosses all three at once), only the
/// highest-priority kind applies; the derived ordering encodes the
/// hierarchy Day > Hour > Minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TickKind {
    /// An ordinary minute boundary.
    Minute,
    /// The configured minute-of-hour tickover.
    Hour,
    /// The configured hour-of-day tickover, at the hour tickover minute.
    Day,
}
