use thiserror::Error;

/// Unified error type for the journal, storage, and insight layers.
#[derive(Error, Debug)]
pub enum SaleTrackError {
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Insight service error: {0}")]
    InsightError(String),
}

pub type Result<T> = std::result::Result<T, SaleTrackError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] SaleTrackError),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<std::io::Error> for SaleTrackError {
    fn from(err: std::io::Error) -> Self {
        SaleTrackError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for SaleTrackError {
    fn from(err: serde_json::Error) -> Self {
        SaleTrackError::StorageError(err.to_string())
    }
}

impl From<reqwest::Error> for SaleTrackError {
    fn from(err: reqwest::Error) -> Self {
        SaleTrackError::InsightError(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Command(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        CliError::Command(err.to_string())
    }
}
