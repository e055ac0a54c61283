//! Core TOML config loading: read from path or platform default.

use std::path::Path;

use shellhost_common::ConfigError;
use tracing::{info, warn};

use crate::schema::ShellConfig;
use crate::validation;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take serde defaults. A config that parses but fails
/// validation is logged and returned as-is.
pub fn load_from_path(path: &Path) -> Result<ShellConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::PathError(format!("failed to read {}: {e}", path.display())))?;

    let config: ShellConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e} (using parsed values)");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/shellhost/config.toml`
/// On macOS: `~/Library/Application Support/shellhost/config.toml`
///
/// If the file does not exist, a commented template is written and the
/// defaults are returned.
pub fn load_default() -> Result<ShellConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(ShellConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Load from `path` when given, else from the default location. Any failure
/// falls back to defaults with a warning; the shell never refuses to start
/// over its config file.
pub fn load_or_default(path: Option<&Path>) -> ShellConfig {
    let result = match path {
        Some(p) => load_from_path(p),
        None => load_default(),
    };
    result.unwrap_or_else(|e| {
        warn!("config load failed, using defaults: {e}");
        ShellConfig::default()
    })
}
