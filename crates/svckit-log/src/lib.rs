//! Structured JSON line logging for svckit services.
//!
//! This crate provides the shared logging primitive used across svckit:
//! - `JsonLogger`: one JSON object per call, one line per record
//! - `Level`: closed severity set (info, warn, error)
//! - `ConfigSource`: injectable lookup for service name and environment tag
//! - `init_diagnostics`: tracing subscriber setup for internal diagnostics
//!
//! Records carry exactly five keys (`timestamp`, `level`, `message`,
//! `service`, `env`) for machine parsing by log aggregators.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod level;
pub mod logger;
pub mod record;

pub use config::{ConfigSource, ProcessEnv, DEFAULT_ENV, DEFAULT_SERVICE, ENV_VAR, SERVICE_NAME_VAR};
pub use diagnostics::init_diagnostics;
pub use error::{LogError, LogResult};
pub use level::Level;
pub use logger::{JsonLogger, JsonLoggerBuilder};
pub use record::LogRecord;
