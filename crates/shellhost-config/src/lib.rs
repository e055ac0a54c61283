//! Shell host configuration.
//!
//! TOML-based, read once at startup. Every section uses serde defaults so
//! partial files (or no file at all) work out of the box. Command-line
//! overrides are merged on top with [`StartupOverrides`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use shellhost_config::{config_to_json, toml_loader};
//!
//! let config = toml_loader::load_or_default(None);
//! println!("{}", config_to_json(&config));
//! ```

pub mod overrides;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use overrides::StartupOverrides;
pub use schema::{ShellConfig, CONFIG_SCHEMA_VERSION, DEFAULT_START_URL};

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ShellConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = ShellConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"startup\""));
        assert!(json.contains("\"loader\""));
        assert!(json.contains("\"screenshots\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_to_json_contains_default_url() {
        let json = config_to_json(&ShellConfig::default());
        assert!(json.contains("http://127.0.0.1:1010/"));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = ShellConfig::default();
        let json = config_to_json(&config);
        let parsed: ShellConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.startup.url, DEFAULT_START_URL);
        assert_eq!(parsed.loader.retry_interval_ms, 5000);
    }
}
