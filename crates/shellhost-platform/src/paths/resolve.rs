use std::path::{Path, PathBuf};

use shellhost_common::PlatformError;

pub(super) const APP_NAME: &str = "shellhost";

/// Returns the platform-specific configuration directory.
///
/// - macOS: `~/Library/Application Support/shellhost`
/// - Linux: `$XDG_CONFIG_HOME/shellhost` (defaults to `~/.config/shellhost`)
/// - Windows: `%APPDATA%\shellhost`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory.
///
/// - macOS: `~/Library/Application Support/shellhost`
/// - Linux: `$XDG_DATA_HOME/shellhost` (defaults to `~/.local/share/shellhost`)
/// - Windows: `%APPDATA%\shellhost`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Returns the path to the log directory, `data_dir()/logs`.
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// Returns the path to the crash report directory, `log_dir()/crash-reports`.
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}

/// The user's pictures directory (`~/Pictures` on most desktops).
pub fn pictures_dir() -> Result<PathBuf, PlatformError> {
    dirs::picture_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine pictures directory".into()))
}

/// Where screenshots go: the configured directory, else the pictures
/// directory, else `data_dir()/screenshots`.
pub fn resolve_screenshot_dir(configured: Option<&Path>) -> Result<PathBuf, PlatformError> {
    if let Some(dir) = configured {
        return Ok(dir.to_path_buf());
    }
    pictures_dir().or_else(|_| Ok(data_dir()?.join("screenshots")))
}
