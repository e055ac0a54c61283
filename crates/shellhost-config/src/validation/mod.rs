//! Full configuration validation.
//!
//! Collects every problem into a single `ConfigError` rather than stopping
//! at the first one.

mod helpers;

#[cfg(test)]
mod tests;

use shellhost_common::ConfigError;

use crate::schema::ShellConfig;

use helpers::{validate_optional_range, validate_range_u64};

/// Largest window dimension accepted from config.
const MAX_DIMENSION: u32 = 16_384;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ShellConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_startup(&mut errors, config);
    validate_loader(&mut errors, config);
    validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_startup(errors: &mut Vec<String>, config: &ShellConfig) {
    if config.startup.url.trim().is_empty() {
        errors.push("startup.url must not be empty".into());
    }
    validate_optional_range(errors, "startup.width", config.startup.width, 1, MAX_DIMENSION);
    validate_optional_range(errors, "startup.height", config.startup.height, 1, MAX_DIMENSION);
}

fn validate_loader(errors: &mut Vec<String>, config: &ShellConfig) {
    validate_range_u64(
        errors,
        "loader.retry_interval_ms",
        config.loader.retry_interval_ms,
        100,
        3_600_000,
    );
    validate_range_u64(
        errors,
        "loader.probe_timeout_ms",
        config.loader.probe_timeout_ms,
        100,
        600_000,
    );
}

fn validate_logging(errors: &mut Vec<String>, config: &ShellConfig) {
    if config.logging.level.trim().is_empty() {
        errors.push("logging.level must not be empty".into());
    }
}
