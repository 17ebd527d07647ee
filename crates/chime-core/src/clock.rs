//! Tickover schedule and pure tick classification.
//!
//! The schedule is the only configuration the classifier needs: the
//! minute-of-hour at which a new hour is triggered and the hour-of-day
//! at which a new day is triggered. Classification is a pure function
//! from a [`ClockSample`] to a [`TickKind`] and never fails.

use chime_types::{ClockSample, TickKind};

/// The configured tickover points for the hour and day events.
///
/// Values are trusted as configured. A value outside the domain the
/// time source can produce (minute 0-59, hour 0-23) never matches any
/// sample, which suppresses that tickover instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickoverSchedule {
    /// Minute-of-hour at which the hour event fires (0-59).
    pub hour_tickover: u32,
    /// Hour-of-day at which the day event fires (0-23).
    pub day_tickover: u32,
}

impl TickoverSchedule {
    /// Create a schedule from the two tickover points.
    pub const fn new(hour_tickover: u32, day_tickover: u32) -> Self {
        Self {
            hour_tickover,
            day_tickover,
        }
    }

    /// Classify a clock sample against the schedule.
    ///
    /// Exactly one kind is returned for every sample, in strict priority
    /// order Day > Hour > Minute. At the day boundary all three
    /// thresholds are crossed at once; only the day tick is reported.
    pub const fn classify(self, sample: ClockSample) -> TickKind {
        let is_hour_tick = sample.minute == self.hour_tickover;
        let is_day_tick = sample.hour == self.day_tickover && is_hour_tick;

        if is_day_tick {
            TickKind::Day
        } else if is_hour_tick {
            TickKind::Hour
        } else {
            TickKind::Minute
        }
    }
}

impl Default for TickoverSchedule {
    /// Both tickovers default to 0: hours turn over on the hour and the
    /// day turns over at midnight.
    fn default() -> Self {
        Self::new(0, 0)
    }
}
