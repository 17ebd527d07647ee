//! Reservation log: the engine's event dispatcher.
//!
//! A real host queues the reserved event for execution on its next
//! frame. The standalone engine logs the reservation instead; dispatch
//! stays fire-and-forget either way.

use chime_core::host::EventDispatcher;
use chime_types::EventHandle;
use tracing::info;

/// Dispatcher that logs each reservation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReservationLog;

impl ReservationLog {
    /// Create a reservation log.
    pub const fn new() -> Self {
        Self
    }
}

impl EventDispatcher for ReservationLog {
    fn reserve(&mut self, handle: EventHandle) {
        info!(handle = handle.into_inner(), "Reserved host event");
    }
}
