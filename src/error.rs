use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse simulation configuration JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Invalid simulation configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to write statistics output: {0}")]
    StatisticsError(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
