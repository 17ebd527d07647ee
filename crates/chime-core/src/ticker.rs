//! The clock ticker: per-tick classification and dispatch.
//!
//! [`ClockTicker`] owns all the mutable state in the system -- the
//! tickover schedule and the three event bindings with their lazily
//! cached resolutions. One instance per process; each instance is
//! independently constructible and testable, with no global state.

use chime_types::{ClockSample, EventHandle, TickKind};
use tracing::debug;

use crate::binding::EventBinding;
use crate::clock::TickoverSchedule;
use crate::config::ChimeConfig;
use crate::host::{EventDispatcher, EventTable};

/// What one tick evaluation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// The sample that was evaluated.
    pub sample: ClockSample,
    /// How the sample was classified.
    pub kind: TickKind,
    /// The handle that was reserved, if the winning binding resolved.
    pub reserved: Option<EventHandle>,
}

/// Evaluates wall-clock samples and reserves at most one host event per
/// tick.
#[derive(Debug, Clone)]
pub struct ClockTicker {
    schedule: TickoverSchedule,
    minute: EventBinding,
    hour: EventBinding,
    day: EventBinding,
}

impl ClockTicker {
    /// Build a ticker from loaded configuration.
    pub fn new(config: &ChimeConfig) -> Self {
        Self::from_parts(
            TickoverSchedule::new(config.tickover.hour, config.tickover.day),
            config.events.minute.clone(),
            config.events.hour.clone(),
            config.events.day.clone(),
        )
    }

    /// Build a ticker from explicit parts (useful for tests).
    pub const fn from_parts(
        schedule: TickoverSchedule,
        minute_event: String,
        hour_event: String,
        day_event: String,
    ) -> Self {
        Self {
            schedule,
            minute: EventBinding::new(TickKind::Minute, minute_event),
            hour: EventBinding::new(TickKind::Hour, hour_event),
            day: EventBinding::new(TickKind::Day, day_event),
        }
    }

    /// The schedule this ticker classifies against.
    pub const fn schedule(&self) -> TickoverSchedule {
        self.schedule
    }

    /// Classify a sample without dispatching.
    pub const fn evaluate(&self, sample: ClockSample) -> TickKind {
        self.schedule.classify(sample)
    }

    /// Evaluate one tick: classify the sample, resolve the winning
    /// binding, and reserve its event.
    ///
    /// At most one event is reserved per call, even when the sample
    /// crosses several thresholds at once. A binding that resolves
    /// absent drops the tick silently; "named event not found" is the
    /// designed quiet path, not an error.
    pub fn tick(
        &mut self,
        sample: ClockSample,
        table: &dyn EventTable,
        dispatcher: &mut dyn EventDispatcher,
    ) -> TickOutcome {
        let kind = self.schedule.classify(sample);
        let reserved = self.dispatch(kind, table, dispatcher);
        TickOutcome {
            sample,
            kind,
            reserved,
        }
    }

    /// Resolve the binding for `kind` and reserve its event.
    ///
    /// Returns the reserved handle, or `None` when the binding resolved
    /// absent or the host table is not yet available.
    pub fn dispatch(
        &mut self,
        kind: TickKind,
        table: &dyn EventTable,
        dispatcher: &mut dyn EventDispatcher,
    ) -> Option<EventHandle> {
        let binding = match kind {
            TickKind::Minute => &mut self.minute,
            TickKind::Hour => &mut self.hour,
            TickKind::Day => &mut self.day,
        };

        match binding.resolve(table) {
            Some(handle) => {
                dispatcher.reserve(handle);
                Some(handle)
            }
            None => {
                debug!(
                    ?kind,
                    event_name = binding.event_name(),
                    "No host event for tick, dropping"
                );
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chime_types::EventEntry;

    use super::*;
    use crate::host::{RecordingDispatcher, StaticEventTable};

    const MINUTE_HANDLE: EventHandle = EventHandle(1);
    const HOUR_HANDLE: EventHandle = EventHandle(2);
    const DAY_HANDLE: EventHandle = EventHandle(3);

    fn entry(name: &str, handle: EventHandle) -> Option<EventEntry> {
        Some(EventEntry {
            name: name.to_owned(),
            handle,
        })
    }

    fn full_table() -> StaticEventTable {
        StaticEventTable::new(vec![
            None,
            entry("realtime_event_minute", MINUTE_HANDLE),
            entry("realtime_event_hour", HOUR_HANDLE),
            entry("realtime_event_day", DAY_HANDLE),
        ])
    }

    fn make_ticker(schedule: TickoverSchedule) -> ClockTicker {
        ClockTicker::from_parts(
            schedule,
            "realtime_event_minute".to_owned(),
            "realtime_event_hour".to_owned(),
            "realtime_event_day".to_owned(),
        )
    }

    #[test]
    fn day_tick_reserves_only_the_day_event() {
        let mut ticker = make_ticker(TickoverSchedule::new(0, 6));
        let table = full_table();
        let mut dispatcher = RecordingDispatcher::new();

        let outcome = ticker.tick(ClockSample::new(6, 0), &table, &mut dispatcher);

        assert_eq!(outcome.kind, TickKind::Day);
        assert_eq!(outcome.reserved, Some(DAY_HANDLE));
        assert_eq!(dispatcher.reserved(), &[DAY_HANDLE]);
    }

    #[test]
    fn one_reservation_per_tick_across_the_hierarchy() {
        let mut ticker = make_ticker(TickoverSchedule::new(0, 6));
        let table = full_table();
        let mut dispatcher = RecordingDispatcher::new();

        ticker.tick(ClockSample::new(5, 59), &table, &mut dispatcher);
        ticker.tick(ClockSample::new(6, 0), &table, &mut dispatcher);
        ticker.tick(ClockSample::new(6, 1), &table, &mut dispatcher);
        ticker.tick(ClockSample::new(7, 0), &table, &mut dispatcher);

        assert_eq!(
            dispatcher.reserved(),
            &[MINUTE_HANDLE, DAY_HANDLE, MINUTE_HANDLE, HOUR_HANDLE]
        );
    }

    #[test]
    fn absent_event_drops_the_tick_silently() {
        let mut ticker = make_ticker(TickoverSchedule::default());
        // Table lacks the minute event entirely.
        let table = StaticEventTable::new(vec![
            entry("realtime_event_hour", HOUR_HANDLE),
            entry("realtime_event_day", DAY_HANDLE),
        ]);
        let mut dispatcher = RecordingDispatcher::new();

        let outcome = ticker.tick(ClockSample::new(9, 30), &table, &mut dispatcher);

        assert_eq!(outcome.kind, TickKind::Minute);
        assert_eq!(outcome.reserved, None);
        assert!(dispatcher.reserved().is_empty());
    }

    #[test]
    fn unavailable_table_retries_on_a_later_tick() {
        let mut ticker = make_ticker(TickoverSchedule::default());
        let mut table = StaticEventTable::unavailable();
        let mut dispatcher = RecordingDispatcher::new();

        let first = ticker.tick(ClockSample::new(9, 30), &table, &mut dispatcher);
        assert_eq!(first.reserved, None);

        table.publish(vec![entry("realtime_event_minute", MINUTE_HANDLE)]);
        let second = ticker.tick(ClockSample::new(9, 31), &table, &mut dispatcher);
        assert_eq!(second.reserved, Some(MINUTE_HANDLE));
        assert_eq!(dispatcher.reserved(), &[MINUTE_HANDLE]);
    }

    #[test]
    fn evaluate_matches_schedule_classification() {
        let ticker = make_ticker(TickoverSchedule::new(20, 6));
        assert_eq!(ticker.evaluate(ClockSample::new(6, 20)), TickKind::Day);
        assert_eq!(ticker.evaluate(ClockSample::new(6, 0)), TickKind::Minute);
    }
}
