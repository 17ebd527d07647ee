//! Error types for the clock trigger binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during startup. Once the tick loop is running there is
//! no error surface left: a missing host event drops its tick silently.

/// Top-level error for the clock trigger binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: chime_core::config::ConfigError,
    },

    /// Host event table construction failed.
    #[error("host table error: {message}")]
    HostTable {
        /// Description of the host table failure.
        message: String,
    },
}
