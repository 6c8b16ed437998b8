//! Integration tests for config loading and validation
//!
//! These tests go through TOML files on disk rather than constructing Config
//! structs directly.

use letter_slider::action::ButtonMap;
use letter_slider::config::Config;
use std::fs;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_dir = temp_dir.path().join("letter-slider");
    fs::create_dir_all(&config_dir).expect("Failed to create config dir");
    let config_path = config_dir.join("config.toml");
    (temp_dir, config_path)
}

#[test]
fn test_config_load_full_toml() {
    let (_temp, config_path) = setup_temp_config();

    let toml_content = r#"
[settings]
field_name = "name"
poll_interval_ms = 120
show_logs = true
log_level = "debug"

[gamepad]
rotate_right = 15
rotate_left = 14
remove = 1
write = 0
"#;
    fs::write(&config_path, toml_content).expect("Failed to write TOML");

    let loaded = Config::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(loaded.settings.field_name, "name");
    assert_eq!(loaded.settings.poll_interval_ms, 120);
    assert!(loaded.settings.show_logs);
    assert_eq!(loaded.settings.log_level, "debug");
    assert_eq!(
        loaded.gamepad,
        ButtonMap {
            rotate_right: 15,
            rotate_left: 14,
            remove: 1,
            write: 0,
        }
    );
}

#[test]
fn test_config_defaults_for_missing_sections() {
    let (_temp, config_path) = setup_temp_config();
    fs::write(&config_path, "[settings]\nshow_logs = true\n").expect("Failed to write TOML");

    let loaded = Config::load_from_path(&config_path).expect("Failed to load config");
    assert!(loaded.settings.show_logs);
    assert_eq!(loaded.settings.poll_interval_ms, 200);
    assert_eq!(loaded.settings.field_name, "test");
    assert_eq!(loaded.gamepad, ButtonMap::default());
}

#[test]
fn test_config_error_mentions_path() {
    let (_temp, config_path) = setup_temp_config();
    fs::write(&config_path, "[gamepad]\nwrite = 1\n").expect("Failed to write TOML");

    let err = Config::load_from_path(&config_path).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("config.toml"), "error should name the file: {msg}");
    assert!(msg.contains("more than one action"), "error should name the problem: {msg}");
}

#[test]
fn test_config_malformed_toml() {
    let (_temp, config_path) = setup_temp_config();
    fs::write(&config_path, "[settings\nfield_name = ").expect("Failed to write TOML");

    assert!(Config::load_from_path(&config_path).is_err());
}

#[test]
fn test_config_missing_file() {
    let (temp, _config_path) = setup_temp_config();
    let missing = temp.path().join("nope.toml");

    let err = Config::load_from_path(&missing).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to read config"));
}
