//! Tracing subscriber initialization for workspace diagnostics.
//!
//! The JSON line logger in this crate is the product; the `tracing`
//! events the library crates emit still need a subscriber. JSON output
//! everywhere except the `dev` environment tag.

use crate::config::{ConfigSource, ProcessEnv};
use crate::error::{LogError, LogResult};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber, writing to stderr.
///
/// Filter comes from `RUST_LOG` when set, otherwise warnings globally
/// and info for the svckit crates.
pub fn init_diagnostics() -> LogResult<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,svckit=info"));

    let is_dev = matches!(ProcessEnv.env_tag().as_deref(), None | Some("dev"));

    if is_dev {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))?;
    }

    Ok(())
}
