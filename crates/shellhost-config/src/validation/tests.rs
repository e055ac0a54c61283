use super::*;
use crate::schema::ShellConfig;

#[test]
fn default_config_is_valid() {
    assert!(validate(&ShellConfig::default()).is_ok());
}

#[test]
fn retry_interval_too_small() {
    let mut config = ShellConfig::default();
    config.loader.retry_interval_ms = 10;
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("loader.retry_interval_ms"));
}

#[test]
fn zero_width_rejected() {
    let mut config = ShellConfig::default();
    config.startup.width = Some(0);
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("startup.width = 0"));
}

#[test]
fn empty_url_rejected() {
    let mut config = ShellConfig::default();
    config.startup.url = "   ".into();
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("startup.url"));
}

#[test]
fn collects_all_errors() {
    let mut config = ShellConfig::default();
    config.startup.url.clear();
    config.startup.height = Some(100_000);
    config.loader.probe_timeout_ms = 0;
    config.logging.level.clear();

    let msg = validate(&config).unwrap_err().to_string();
    assert!(msg.contains("startup.url"));
    assert!(msg.contains("startup.height"));
    assert!(msg.contains("loader.probe_timeout_ms"));
    assert!(msg.contains("logging.level"));
    assert_eq!(msg.matches("; ").count(), 3);
}
