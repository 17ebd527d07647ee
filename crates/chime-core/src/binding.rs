//! Event bindings with lazily cached handle resolution.
//!
//! Each tick kind is bound to a configured host event name. The binding
//! resolves to a handle at most once: the first definitive lookup result
//! (found or not found) is cached for the process lifetime, since the
//! host's table is immutable once published. While the table is still
//! unavailable the lookup is deferred without caching -- the table
//! appearing later is a valid state transition.

use chime_types::{EventHandle, TickKind};

use crate::host::EventTable;

/// Resolution state of a binding, transitioning only forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// No definitive lookup has happened yet.
    Unresolved,
    /// The configured name matched a table entry.
    Present(EventHandle),
    /// The configured name definitively matched nothing; never retried.
    Absent,
}

/// A configured association between a tick kind and a host event name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBinding {
    kind: TickKind,
    event_name: String,
    resolution: Resolution,
}

impl EventBinding {
    /// Create an unresolved binding for `kind` with the configured name.
    pub const fn new(kind: TickKind, event_name: String) -> Self {
        Self {
            kind,
            event_name,
            resolution: Resolution::Unresolved,
        }
    }

    /// The tick kind this binding fires for.
    pub const fn kind(&self) -> TickKind {
        self.kind
    }

    /// The configured host event name.
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    /// The current resolution state.
    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Resolve the binding against the host table, caching the outcome.
    ///
    /// Scans the table rows in host order and takes the first entry
    /// whose name equals the configured name exactly (case-sensitive).
    /// A definitive hit or miss is cached and the table is never scanned
    /// again. An unavailable table defers resolution without caching. A
    /// name that can never match (empty) is cached absent immediately,
    /// without consulting the table.
    pub fn resolve(&mut self, table: &dyn EventTable) -> Option<EventHandle> {
        match self.resolution {
            Resolution::Present(handle) => Some(handle),
            Resolution::Absent => None,
            Resolution::Unresolved => {
                if self.event_name.is_empty() {
                    self.resolution = Resolution::Absent;
                    return None;
                }

                let rows = table.entries()?;
                match rows.iter().flatten().find(|e| e.name == self.event_name) {
                    Some(entry) => {
                        self.resolution = Resolution::Present(entry.handle);
                        Some(entry.handle)
                    }
                    None => {
                        self.resolution = Resolution::Absent;
                        None
                    }
                }
            }
        }
    }
}
