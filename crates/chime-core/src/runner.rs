//! Minute-boundary alignment and the steady tick loop.
//!
//! The natural lifecycle has two suspension points: a second-granularity
//! wait that suspends until the wall clock's seconds field reads zero
//! (the top of the next minute), then a minute-granularity repeating
//! wait. Each wait is rescheduled after its work completes, so the timer
//! is free-running; slippage across successive minute boundaries is
//! accepted and never corrected against absolute time.
//!
//! The loop runs for the lifetime of the host process. It is not
//! designed to be stopped or restarted.

use std::time::Duration;

use tracing::{debug, info};

use crate::host::{EventDispatcher, EventTable};
use crate::ticker::ClockTicker;
use crate::time::TimeSource;

/// Poll cadence of the alignment phase.
const ALIGN_INTERVAL: Duration = Duration::from_secs(1);

/// Steady-state tick cadence.
const TICK_INTERVAL: Duration = Duration::from_secs(60);

/// Sleep in one-second steps until the wall clock reads second zero.
///
/// The first tick must land on a minute boundary; after that the steady
/// minute-long sleeps keep approximate pace.
pub async fn align_to_minute(source: &impl TimeSource) {
    loop {
        let now = source.now();
        if now.second == 0 {
            return;
        }
        debug!(second = now.second, "Waiting for minute boundary");
        tokio::time::sleep(ALIGN_INTERVAL).await;
    }
}

/// Run the ticker indefinitely: align to the next minute boundary, then
/// evaluate one tick per minute.
///
/// Never returns; the host process's lifecycle governs shutdown. Each
/// tick takes a fresh wall-clock sample, classifies it, reserves at most
/// one host event, and logs the outcome. Dispatch is fire-and-forget.
pub async fn run(
    mut ticker: ClockTicker,
    source: impl TimeSource,
    table: impl EventTable,
    mut dispatcher: impl EventDispatcher,
) {
    align_to_minute(&source).await;
    info!("Aligned to minute boundary, entering tick loop");

    loop {
        let now = source.now();
        let outcome = ticker.tick(now.sample(), &table, &mut dispatcher);

        info!(
            hour = outcome.sample.hour,
            minute = outcome.sample.minute,
            kind = ?outcome.kind,
            reserved = ?outcome.reserved,
            "Tick evaluated"
        );

        tokio::time::sleep(TICK_INTERVAL).await;
    }
}
