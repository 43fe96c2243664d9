//! Fixture configuration.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable holding a generation seed.
pub const SEED_ENV: &str = "AUTODATA_SEED";

/// Environment variable holding the collection length.
pub const REPEAT_COUNT_ENV: &str = "AUTODATA_REPEAT_COUNT";

/// Configuration for a `DefaultFixture`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// Number of elements generated for collection arguments
    pub repeat_count: usize,
    /// How many times one type may appear on a construction path
    pub max_recursion_depth: usize,
    /// Seed for deterministic generation; random when absent
    pub seed: Option<u64>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            repeat_count: 3,
            max_recursion_depth: 1,
            seed: None,
        }
    }
}

impl FixtureConfig {
    /// Load configuration from `AUTODATA_SEED` and `AUTODATA_REPEAT_COUNT`.
    ///
    /// Unparsable values are logged and ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(seed) = parse_env::<u64>(SEED_ENV) {
            config.seed = Some(seed);
        }
        if let Some(count) = parse_env::<usize>(REPEAT_COUNT_ENV) {
            config.repeat_count = count;
        }
        config
    }

    /// Set the collection length.
    #[must_use]
    pub const fn with_repeat_count(mut self, count: usize) -> Self {
        self.repeat_count = count;
        self
    }

    /// Set the recursion depth (at least 1).
    #[must_use]
    pub fn with_max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth.max(1);
        self
    }

    /// Set a generation seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(variable = name, value = %raw, "ignoring unparsable fixture setting");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FixtureConfig::default();
        assert_eq!(config.repeat_count, 3);
        assert_eq!(config.max_recursion_depth, 1);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = FixtureConfig::default()
            .with_repeat_count(5)
            .with_max_recursion_depth(0)
            .with_seed(7);

        assert_eq!(config.repeat_count, 5);
        assert_eq!(config.max_recursion_depth, 1);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: FixtureConfig = serde_json::from_str(r#"{"seed": 11}"#).unwrap();
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.repeat_count, 3);
    }
}
