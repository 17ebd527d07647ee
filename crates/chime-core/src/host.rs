//! Host collaborator seams: the event table and the event dispatcher.
//!
//! The host owns both sides. The event table is an ordered, read-only
//! collection of named entries that may become available some time after
//! this process starts; the dispatcher reserves a resolved event for
//! execution and reports nothing back. [`StaticEventTable`] is the
//! in-memory table used by the engine binary and by tests;
//! [`RecordingDispatcher`] lets tests observe reservations.

use chime_types::{EventEntry, EventHandle};

/// The host's event table.
///
/// An ordered sequence of rows, some of which may be empty slots.
/// [`entries`] returns `None` until the host has published the table;
/// binding resolution treats that as "try again next tick" rather than
/// a definitive miss.
///
/// [`entries`]: EventTable::entries
pub trait EventTable {
    /// The table rows in host order, or `None` while the table is not
    /// yet available.
    fn entries(&self) -> Option<&[Option<EventEntry>]>;
}

/// Fire-and-forget reservation of a resolved host event.
///
/// There is no return value and no observable failure mode; the host is
/// trusted to accept a reservation at any time after the handle was
/// resolved. The caller never waits for or observes the triggered
/// event's completion.
pub trait EventDispatcher {
    /// Reserve the event identified by `handle` for execution.
    fn reserve(&mut self, handle: EventHandle);
}

/// An in-memory event table with a fixed row order.
#[derive(Debug, Clone, Default)]
pub struct StaticEventTable {
    rows: Option<Vec<Option<EventEntry>>>,
}

impl StaticEventTable {
    /// Create a table from its rows, available immediately.
    pub const fn new(rows: Vec<Option<EventEntry>>) -> Self {
        Self { rows: Some(rows) }
    }

    /// Create a table that reports unavailable until [`publish`] is
    /// called.
    ///
    /// [`publish`]: StaticEventTable::publish
    pub const fn unavailable() -> Self {
        Self { rows: None }
    }

    /// Publish rows, making the table available from now on.
    pub fn publish(&mut self, rows: Vec<Option<EventEntry>>) {
        self.rows = Some(rows);
    }
}

impl EventTable for StaticEventTable {
    fn entries(&self) -> Option<&[Option<EventEntry>]> {
        self.rows.as_deref()
    }
}

/// A dispatcher that records every reservation, for tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatcher {
    reserved: Vec<EventHandle>,
}

impl RecordingDispatcher {
    /// Create an empty recording dispatcher.
    pub const fn new() -> Self {
        Self {
            reserved: Vec::new(),
        }
    }

    /// The handles reserved so far, in call order.
    pub fn reserved(&self) -> &[EventHandle] {
        &self.reserved
    }
}

impl EventDispatcher for RecordingDispatcher {
    fn reserve(&mut self, handle: EventHandle) {
        self.reserved.push(handle);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn entry(name: &str, id: u32) -> Option<EventEntry> {
        Some(EventEntry {
            name: name.to_owned(),
            handle: EventHandle(id),
        })
    }

    #[test]
    fn unavailable_table_has_no_entries() {
        let table = StaticEventTable::unavailable();
        assert!(table.entries().is_none());
    }

    #[test]
    fn publish_makes_rows_visible_in_order() {
        let mut table = StaticEventTable::unavailable();
        table.publish(vec![None, entry("dawn_bell", 1), entry("noon_bell", 2)]);

        let rows = table.entries().unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.first().unwrap().is_none());
        assert_eq!(rows.get(1).unwrap().as_ref().unwrap().handle, EventHandle(1));
    }

    #[test]
    fn recording_dispatcher_keeps_call_order() {
        let mut dispatcher = RecordingDispatcher::new();
        dispatcher.reserve(EventHandle(3));
        dispatcher.reserve(EventHandle(1));
        assert_eq!(dispatcher.reserved(), &[EventHandle(3), EventHandle(1)]);
    }
}
