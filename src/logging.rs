use crate::config::LoggingSettings;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Failed to install subscriber: {0}")]
    Install(String),
}

/// Output layout of the fmt subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-line human output
    Pretty,
    /// Single-line text
    Plain,
}

impl LogFormat {
    /// Unrecognized names fall back to JSON, the configured default
    pub fn from_setting(format: &str) -> Self {
        match format.trim().to_ascii_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            "plain" | "text" | "compact" => LogFormat::Plain,
            _ => LogFormat::Json,
        }
    }
}

/// Install a global fmt subscriber
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init(settings: &LoggingSettings) -> Result<(), LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level)?,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let result = match LogFormat::from_setting(&settings.format) {
        LogFormat::Json => subscriber.json().try_init(),
        LogFormat::Pretty => subscriber.pretty().try_init(),
        LogFormat::Plain => subscriber.try_init(),
    };

    result.map_err(|e| LoggingError::Install(e.to_string()))
}
