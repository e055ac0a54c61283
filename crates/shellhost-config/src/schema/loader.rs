//! Retry loader configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How the primary surface waits for its content source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Fixed delay between failed load attempts, in milliseconds.
    pub retry_interval_ms: u64,
    /// Upper bound on a single reachability probe, in milliseconds.
    pub probe_timeout_ms: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            retry_interval_ms: 5000,
            probe_timeout_ms: 3000,
        }
    }
}

impl LoaderConfig {
    pub fn retry_interval(&self) -> Duration {
        Duration::from_millis(self.retry_interval_ms)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_defaults() {
        let config = LoaderConfig::default();
        assert_eq!(config.retry_interval(), Duration::from_secs(5));
        assert_eq!(config.probe_timeout(), Duration::from_secs(3));
    }
}
