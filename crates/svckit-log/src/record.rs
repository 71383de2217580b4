//! Log record shape and timestamping.

use crate::level::Level;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single structured log record.
///
/// Serialized as one flat JSON object. Field declaration order is the
/// emitted key order (serde_json preserves it), which keeps snapshot
/// tests stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    /// ISO-8601 UTC instant with a literal `Z` suffix, taken at format time.
    pub timestamp: String,
    pub level: Level,
    /// Caller-supplied message, verbatim.
    pub message: String,
    /// Service name bound at logger construction.
    pub service: String,
    /// Environment tag resolved at format time.
    pub env: String,
}

impl LogRecord {
    /// Build a record stamped with the current UTC wall clock.
    pub fn now(level: Level, message: &str, service: &str, env: String) -> Self {
        Self {
            timestamp: utc_timestamp(),
            level,
            message: message.to_string(),
            service: service.to_string(),
            env,
        }
    }
}

/// Current UTC instant, microsecond precision, `Z`-suffixed.
pub(crate) fn utc_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}
