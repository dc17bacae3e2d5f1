use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use thiserror::Error;

/// Top-level error for the binary: everything the CLI can fail on, with
/// sources preserved for the terminal report.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("i/o error")]
    Io(#[from] std::io::Error),
    #[error("serialization error")]
    Serialization(#[from] serde_json::Error),
}
