//! JSON line logger.
//!
//! One call, one flushed line. The sink is held behind a mutex so records
//! from concurrent call sites never interleave inside a single line.

use crate::config::{ConfigSource, ProcessEnv, DEFAULT_ENV, DEFAULT_SERVICE};
use crate::error::LogResult;
use crate::level::Level;
use crate::record::LogRecord;
use parking_lot::Mutex;
use std::io::Write;

/// Structured JSON logger bound to a service name.
///
/// Constructed once per service process. The service name is fixed at
/// construction; the environment tag is resolved on every emission via
/// the injected [`ConfigSource`] unless an explicit override was given,
/// so a tag changed mid-process is reflected in later records.
///
/// Emission is never retried: a failed sink write or serialization is
/// returned to the caller as-is.
pub struct JsonLogger {
    service: String,
    env_override: Option<String>,
    config: Box<dyn ConfigSource>,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl JsonLogger {
    /// Start building a logger.
    pub fn builder() -> JsonLoggerBuilder {
        JsonLoggerBuilder::default()
    }

    /// Service name this logger is bound to.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Emit an `info` record.
    pub fn info(&self, message: &str) -> LogResult<()> {
        self.emit(Level::Info, message)
    }

    /// Emit a `warn` record.
    pub fn warn(&self, message: &str) -> LogResult<()> {
        self.emit(Level::Warn, message)
    }

    /// Emit an `error` record.
    pub fn error(&self, message: &str) -> LogResult<()> {
        self.emit(Level::Error, message)
    }

    /// Environment tag for the next record, resolved at format time.
    fn current_env(&self) -> String {
        self.env_override
            .clone()
            .or_else(|| self.config.env_tag())
            .unwrap_or_else(|| DEFAULT_ENV.to_string())
    }

    /// Serialize one record and write it as a single flushed line.
    fn emit(&self, level: Level, message: &str) -> LogResult<()> {
        let record = LogRecord::now(level, message, &self.service, self.current_env());
        let line = serde_json::to_string(&record)?;

        // Lock covers write and flush, keeping each line atomic.
        let mut sink = self.sink.lock();
        writeln!(sink, "{line}")?;
        sink.flush()?;
        Ok(())
    }
}

/// Builder for [`JsonLogger`].
///
/// All fields are optional. Service name falls back to the config
/// source, then to `"unknown"`. The sink defaults to stderr.
#[derive(Default)]
pub struct JsonLoggerBuilder {
    service: Option<String>,
    env: Option<String>,
    config: Option<Box<dyn ConfigSource>>,
    sink: Option<Box<dyn Write + Send>>,
}

impl JsonLoggerBuilder {
    /// Bind an explicit service name.
    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Pin the environment tag, disabling the per-emission re-read.
    pub fn env(mut self, env: impl Into<String>) -> Self {
        self.env = Some(env.into());
        self
    }

    /// Substitute the configuration source (defaults to process env vars).
    pub fn config_source(mut self, config: impl ConfigSource + 'static) -> Self {
        self.config = Some(Box::new(config));
        self
    }

    /// Substitute the output sink (defaults to stderr).
    pub fn sink(mut self, sink: impl Write + Send + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn build(self) -> JsonLogger {
        let config = self.config.unwrap_or_else(|| Box::new(ProcessEnv));
        let service = self
            .service
            .or_else(|| config.service_name())
            .unwrap_or_else(|| DEFAULT_SERVICE.to_string());
        let sink: Box<dyn Write + Send> = match self.sink {
            Some(sink) => sink,
            None => Box::new(std::io::stderr()),
        };

        JsonLogger {
            service,
            env_override: self.env,
            config,
            sink: Mutex::new(sink),
        }
    }
}
