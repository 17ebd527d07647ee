//! Shared type definitions for the chime clock trigger.
//!
//! This crate is the single source of truth for the plain types that
//! cross crate boundaries: wall-clock readings, tick classification, and
//! host event identifiers.
//!
//! # Modules
//!
//! - [`time`] -- Wall-clock readings at second and minute resolution
//! - [`event`] -- Tick kinds and opaque host event identifiers

pub mod event;
pub mod time;

// Re-export all public types at crate root for convenience.
pub use event::{EventEntry, EventHandle, TickKind};
pub use time::{ClockSample, WallTime};
