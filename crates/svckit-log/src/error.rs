//! Logging error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Record serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Sink write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Diagnostics initialization failed: {0}")]
    Init(String),
}

pub type LogResult<T> = Result<T, LogError>;
