//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod loader;
mod logging;
mod screenshots;
mod startup;

pub use loader::*;
pub use logging::*;
pub use screenshots::*;
pub use startup::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the shell host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub startup: StartupConfig,
    pub loader: LoaderConfig,
    pub screenshots: ScreenshotConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: ShellConfig = toml::from_str("").unwrap();
        assert_eq!(config.startup.url, DEFAULT_START_URL);
        assert!(config.startup.fullscreen());
        assert_eq!(config.loader.retry_interval_ms, 5000);
        assert!(config.screenshots.directory.is_none());
        assert_eq!(config.logging.level, "shellhost=info");
    }

    #[test]
    fn partial_toml_keeps_other_sections() {
        let config: ShellConfig = toml::from_str(
            r#"
[startup]
url = "http://localhost:3000/"
width = 1024

[loader]
retry_interval_ms = 250
"#,
        )
        .unwrap();
        assert_eq!(config.startup.url, "http://localhost:3000/");
        assert_eq!(config.startup.width, Some(1024));
        assert_eq!(config.startup.height, None);
        assert!(!config.startup.fullscreen());
        assert_eq!(config.loader.retry_interval_ms, 250);
        assert_eq!(config.loader.probe_timeout_ms, 3000);
        assert_eq!(config.logging.level, "shellhost=info");
    }
}
