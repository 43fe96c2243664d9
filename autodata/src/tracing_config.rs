//! Tracing subscriber setup for test binaries.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Tracing configuration.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Service name attached to the startup event
    pub service_name: String,
    /// Log level filter, used when `RUST_LOG` is unset
    pub log_level: String,
    /// Whether to output JSON format
    pub json_output: bool,
    /// Whether to write through the test harness's captured output
    pub test_writer: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            service_name: "autodata".to_string(),
            log_level: "info".to_string(),
            json_output: false,
            test_writer: true,
        }
    }
}

impl TracingConfig {
    /// Set the service name.
    #[must_use]
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    /// Set the log level.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable JSON output.
    #[must_use]
    pub const fn with_json_output(mut self) -> Self {
        self.json_output = true;
        self
    }

    /// Write to stdout directly instead of the test harness capture.
    #[must_use]
    pub const fn without_test_writer(mut self) -> Self {
        self.test_writer = false;
        self
    }
}

/// Install the global tracing subscriber.
///
/// Returns `false` if a subscriber was already installed, so every test may
/// call this.
#[must_use]
pub fn init_tracing(config: &TracingConfig) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match (config.json_output, config.test_writer) {
        (true, true) => registry
            .with(tracing_subscriber::fmt::layer().json().with_test_writer())
            .try_init(),
        (true, false) => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        (false, true) => registry
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init(),
        (false, false) => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    }
    .is_ok();

    if installed {
        tracing::info!(service = %config.service_name, "tracing initialised");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TracingConfig::default();
        assert_eq!(config.service_name, "autodata");
        assert_eq!(config.log_level, "info");
        assert!(!config.json_output);
        assert!(config.test_writer);
    }

    #[test]
    fn test_config_builder() {
        let config = TracingConfig::default()
            .with_service_name("autodata-tests")
            .with_log_level("debug")
            .with_json_output()
            .without_test_writer();

        assert_eq!(config.service_name, "autodata-tests");
        assert_eq!(config.log_level, "debug");
        assert!(config.json_output);
        assert!(!config.test_writer);
    }

    #[test]
    fn test_repeated_init_is_harmless() {
        let config = TracingConfig::default().with_log_level("debug");
        let _ = init_tracing(&config);
        assert!(!init_tracing(&config));
    }
}
