use std::fs;

use shellhost_common::PlatformError;

use super::resolve::{config_dir, crash_report_dir, data_dir, log_dir};

/// Creates the shell host directories if they do not already exist.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    for dir in [config_dir()?, data_dir()?, log_dir()?, crash_report_dir()?] {
        fs::create_dir_all(&dir).map_err(|e| PlatformError::PathError(e.to_string()))?;
    }
    Ok(())
}
