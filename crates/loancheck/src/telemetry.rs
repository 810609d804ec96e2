use crate::config::TelemetryConfig;
use tracing_subscriber::filter::{EnvFilter, ParseError};

/// Failure while installing the global tracing subscriber.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("log level '{filter}' is not a valid tracing directive")]
    InvalidFilter {
        filter: String,
        #[source]
        source: ParseError,
    },
    #[error("global tracing subscriber already installed")]
    AlreadyInitialized,
}

/// Install the fmt subscriber filtered by the configured log level.
///
/// Must run once per process, before any spans or events are emitted.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::InvalidFilter {
            filter: config.log_level.clone(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|_| TelemetryError::AlreadyInitialized)
}
