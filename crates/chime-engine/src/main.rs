//! Clock trigger binary for chime.
//!
//! Wires together the wall-clock time source, the host event table, the
//! reservation log, and the minute-loop runner. Loads configuration,
//! initializes all subsystems, and runs the tick loop for the lifetime
//! of the process.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `chime-config.yaml`
//! 3. Build the host event table from the `host` config section
//! 4. Create the clock ticker from the trigger configuration
//! 5. Align to the next minute boundary and run the tick loop

mod error;
mod reserve;
mod table;

use std::path::Path;

use chime_core::config::ChimeConfig;
use chime_core::host::EventTable as _;
use chime_core::runner;
use chime_core::ticker::ClockTicker;
use chime_core::time::SystemTimeSource;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::reserve::ReservationLog;

/// Path of the YAML configuration file, relative to the working
/// directory.
const CONFIG_PATH: &str = "chime-config.yaml";

/// Application entry point for the clock trigger.
///
/// Initializes all subsystems and enters the tick loop, which runs
/// until the process ends.
///
/// # Errors
///
/// Returns an error if configuration loading or host table construction
/// fails; the tick loop itself has no error surface.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("chime-engine starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        minute_event = %config.events.minute,
        hour_event = %config.events.hour,
        day_event = %config.events.day,
        hour_tickover = config.tickover.hour,
        day_tickover = config.tickover.day,
        "Configuration loaded"
    );

    // 3. Build the host event table.
    let table = table::load_host_table(Path::new(CONFIG_PATH))?;
    let row_count = table.entries().map_or(0, |rows| rows.len());
    info!(row_count, "Host event table loaded");

    // 4. Create the clock ticker.
    let ticker = ClockTicker::new(&config);
    info!("Clock ticker initialized");

    // 5. Run.
    info!("Aligning to the next minute boundary");
    runner::run(ticker, SystemTimeSource::new(), table, ReservationLog::new()).await;

    Ok(())
}

/// Load the trigger configuration from `chime-config.yaml`.
///
/// Looks for the config file relative to the current working directory.
fn load_config() -> Result<ChimeConfig, EngineError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        let config = ChimeConfig::from_file(config_path)?;
        Ok(config)
    } else {
        info!("Config file not found, using defaults");
        Ok(ChimeConfig::default())
    }
}
