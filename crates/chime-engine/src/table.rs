//! Host event table loaded from the `host` section of the config file.
//!
//! A standalone engine has no game host handing it an event table, so
//! the rows come from `chime-config.yaml`. Row order is preserved and
//! each handle is the row's position, matching how a host numbers its
//! events; `null` rows stay empty, like a host's unused slots.

use std::path::Path;

use chime_core::host::StaticEventTable;
use chime_types::{EventEntry, EventHandle};
use serde::Deserialize;

use crate::error::EngineError;

/// The `host` section of `chime-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HostTableConfig {
    /// Ordered event names; `null` entries are empty slots.
    #[serde(default)]
    pub events: Vec<Option<String>>,
}

/// Load the host table from `chime-config.yaml`.
///
/// Reads the `host` key of the YAML config file. A missing file or a
/// missing key yields an empty (but available) table, in which case
/// every binding resolves absent and every tick is dropped silently.
///
/// # Errors
///
/// Returns [`EngineError::HostTable`] if the file exists but cannot be
/// read or parsed.
pub fn load_host_table(config_path: &Path) -> Result<StaticEventTable, EngineError> {
    if !config_path.exists() {
        return Ok(build_table(&HostTableConfig::default()));
    }

    let contents = std::fs::read_to_string(config_path).map_err(|e| EngineError::HostTable {
        message: format!("failed to read config file: {e}"),
    })?;

    // Parse the full YAML and extract just the "host" section.
    let raw: serde_yml::Value = serde_yml::from_str(&contents).map_err(|e| EngineError::HostTable {
        message: format!("failed to parse config YAML: {e}"),
    })?;

    raw.get("host").map_or_else(
        || Ok(build_table(&HostTableConfig::default())),
        |host_value| {
            let host_config: HostTableConfig =
                serde_yml::from_value(host_value.clone()).map_err(|e| EngineError::HostTable {
                    message: format!("failed to parse host config: {e}"),
                })?;
            Ok(build_table(&host_config))
        },
    )
}

/// Build the in-memory table from config rows, assigning handles from
/// row order.
fn build_table(config: &HostTableConfig) -> StaticEventTable {
    let rows = config
        .events
        .iter()
        .enumerate()
        .map(|(index, name)| {
            name.as_ref().map(|name| EventEntry {
                name: name.clone(),
                handle: EventHandle(u32::try_from(index).unwrap_or(u32::MAX)),
            })
        })
        .collect();

    StaticEventTable::new(rows)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chime_core::host::EventTable;

    use super::*;

    #[test]
    fn handles_follow_row_order_and_null_rows_stay_empty() {
        let config = HostTableConfig {
            events: vec![
                None,
                Some("realtime_event_minute".to_owned()),
                Some("realtime_event_hour".to_owned()),
            ],
        };

        let table = build_table(&config);
        let rows = table.entries().unwrap();

        assert_eq!(rows.len(), 3);
        assert!(rows.first().unwrap().is_none());
        let minute = rows.get(1).unwrap().as_ref().unwrap();
        assert_eq!(minute.name, "realtime_event_minute");
        assert_eq!(minute.handle, EventHandle(1));
        let hour = rows.get(2).unwrap().as_ref().unwrap();
        assert_eq!(hour.handle, EventHandle(2));
    }

    #[test]
    fn empty_config_yields_an_available_empty_table() {
        let table = build_table(&HostTableConfig::default());
        assert_eq!(table.entries().unwrap().len(), 0);
    }

    #[test]
    fn host_section_parses_null_rows() {
        let yaml = "events:\n  - null\n  - realtime_event_minute\n";
        let config: HostTableConfig = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.events.len(), 2);
        assert!(config.events.first().unwrap().is_none());
    }
}
