//! Time source abstraction over the system wall clock.
//!
//! The production implementation reads the host process's local time
//! verbatim; tests script their own reading sequences so scheduling is
//! deterministic.

use chime_types::WallTime;
use chrono::{Local, Timelike};

/// A source of wall-clock readings.
pub trait TimeSource {
    /// Return the current wall-clock time.
    fn now(&self) -> WallTime;
}

/// Reads the system's local time.
///
/// Whatever the local clock reports is used as-is; there is no timezone
/// handling.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl SystemTimeSource {
    /// Create a system time source.
    pub const fn new() -> Self {
        Self
    }
}

impl TimeSource for SystemTimeSource {
    fn now(&self) -> WallTime {
        let now = Local::now();
        WallTime::new(now.hour(), now.minute(), now.second())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_source_stays_in_clock_domain() {
        let time = SystemTimeSource::new().now();
        assert!(time.hour < 24);
        assert!(time.minute < 60);
        assert!(time.second < 60);
    }
}
