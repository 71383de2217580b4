//! Error types for reference data generation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RefDataError {
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for generator operations.
pub type RefDataResult<T> = Result<T, RefDataError>;
