//! Process-wide configuration lookup for logger defaults.

/// Environment variable supplying the default service name.
pub const SERVICE_NAME_VAR: &str = "SERVICE_NAME";

/// Environment variable supplying the environment tag.
pub const ENV_VAR: &str = "ENV";

/// Service name used when nothing is configured.
pub const DEFAULT_SERVICE: &str = "unknown";

/// Environment tag used when nothing is configured.
pub const DEFAULT_ENV: &str = "dev";

/// Source of service-level configuration values.
///
/// The logger re-reads the environment tag through this trait on every
/// emission, so a value changed after construction shows up in later
/// records. Substituting a fixed source makes that behavior testable
/// without touching process environment variables.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigSource: Send + Sync {
    /// Configured service name, if any.
    fn service_name(&self) -> Option<String>;

    /// Configured environment tag, if any.
    fn env_tag(&self) -> Option<String>;
}

/// Reads configuration from process environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn service_name(&self) -> Option<String> {
        std::env::var(SERVICE_NAME_VAR).ok()
    }

    fn env_tag(&self) -> Option<String> {
        std::env::var(ENV_VAR).ok()
    }
}
