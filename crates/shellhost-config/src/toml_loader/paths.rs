//! Where the config file lives, and seeding it with the commented template.

use std::path::{Path, PathBuf};

use shellhost_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "shellhost";
const CONFIG_FILE: &str = "config.toml";

/// `<platform config dir>/shellhost/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| ConfigError::PathError("no platform config directory".into()))
}

/// Write the commented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_error = |what: &str, at: &Path, e: std::io::Error| {
        ConfigError::PathError(format!("{what} {}: {e}", at.display()))
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| io_error("cannot create", dir, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_error("cannot write", path, e))?;

    info!(path = %path.display(), "Wrote default config");
    Ok(())
}
