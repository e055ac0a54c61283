//! Tests for TOML config loading, creation, and path resolution.

use std::path::Path;

use super::template::default_config_toml;
use super::*;
use crate::schema::{ShellConfig, DEFAULT_START_URL};

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_shellhost_config.toml"));
    assert!(matches!(
        result,
        Err(shellhost_common::ConfigError::FileNotFound(_))
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[startup]
url = "http://10.0.0.2:8080/kiosk"
x = 100
y = 50
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.startup.url, "http://10.0.0.2:8080/kiosk");
    assert_eq!(config.startup.position(), Some((100, 50)));
    assert!(!config.startup.fullscreen());
    assert_eq!(config.loader.retry_interval_ms, 5000);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(
        result,
        Err(shellhost_common::ConfigError::ParseError(_))
    ));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[loader]\nretry_interval_ms = 1\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.loader.retry_interval_ms, 1);
}

#[test]
fn load_or_default_falls_back_on_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[startup\nurl=").unwrap();

    let config = load_or_default(Some(&path));
    assert_eq!(config.startup.url, DEFAULT_START_URL);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shellhost").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.startup.url, DEFAULT_START_URL);
    assert!(config.startup.fullscreen());
}

#[test]
fn default_config_toml_is_valid() {
    let config: ShellConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config.loader.retry_interval_ms, 5000);
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("shellhost"));
        assert!(path_str.ends_with("config.toml"));
    }
}

#[test]
fn create_default_config_reports_unwritable_location_as_path_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();

    let result = create_default_config(&blocker.join("config.toml"));
    assert!(matches!(
        result,
        Err(shellhost_common::ConfigError::PathError(_))
    ));
}
