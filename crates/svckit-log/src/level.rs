//! Severity levels for structured log records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a log record.
///
/// The set is closed: `info` is the minimum severity the logger emits,
/// so there is no debug variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    /// Lowercase name as it appears in emitted records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Level::Info).unwrap(), r#""info""#);
        assert_eq!(serde_json::to_string(&Level::Warn).unwrap(), r#""warn""#);
        assert_eq!(serde_json::to_string(&Level::Error).unwrap(), r#""error""#);
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }
}
