//! CLI smoke tests - run the compiled binary
//!
//! Every command gets a private `XDG_CONFIG_HOME` so the user's real config is
//! never read or created.

use std::process::Command;
use tempfile::TempDir;

/// Binary with an isolated config directory
fn letter_slider_bin(xdg: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_letter-slider"));
    cmd.env("XDG_CONFIG_HOME", xdg.path()).env("NO_COLOR", "1");
    cmd
}

fn temp_xdg() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[test]
fn cli_help_works() {
    let xdg = temp_xdg();
    let output = letter_slider_bin(&xdg)
        .arg("--help")
        .output()
        .expect("Failed to run letter-slider --help");

    assert!(output.status.success(), "--help should exit successfully");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"), "Help should show usage");
    assert!(stdout.contains("replay"), "Help should list replay command");
    assert!(stdout.contains("validate"), "Help should list validate command");
    assert!(stdout.contains("tui"), "Help should list tui command");
}

#[test]
fn cli_version_works() {
    let xdg = temp_xdg();
    let output = letter_slider_bin(&xdg)
        .arg("--version")
        .output()
        .expect("Failed to run letter-slider --version");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("letter-slider"));
    assert!(
        stdout.split_whitespace().count() >= 2,
        "Version should show name and version number"
    );
}

#[test]
fn cli_validate_creates_default_config() {
    let xdg = temp_xdg();
    let output = letter_slider_bin(&xdg)
        .arg("validate")
        .output()
        .expect("Failed to run letter-slider validate");

    assert!(
        output.status.success(),
        "validate should succeed on a fresh default config: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration valid"));
    assert!(stdout.contains("poll_interval_ms"));
    assert!(xdg.path().join("letter-slider/config.toml").exists());
}

#[test]
fn cli_validate_rejects_bad_config() {
    let xdg = temp_xdg();
    let config_path = xdg.path().join("bad.toml");
    std::fs::write(&config_path, "[settings]\npoll_interval_ms = 0\n").expect("write config");

    let output = letter_slider_bin(&xdg)
        .args(["validate", "--config"])
        .arg(&config_path)
        .output()
        .expect("Failed to run letter-slider validate");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("poll_interval_ms"), "stderr: {stderr}");
}

#[test]
fn cli_replay_json() {
    let xdg = temp_xdg();
    let output = letter_slider_bin(&xdg)
        .args(["replay", "--json", "r r enter l l enter"])
        .output()
        .expect("Failed to run letter-slider replay");

    assert!(
        output.status.success(),
        "replay failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("replay --json should print JSON");
    assert_eq!(json["text"], "ca");
    assert_eq!(json["cursor"], 0);
    assert_eq!(json["letter"], "a");
}

#[test]
fn cli_replay_wraps_and_removes() {
    let xdg = temp_xdg();
    let output = letter_slider_bin(&xdg)
        .args(["replay", "--json", "left", "enter", "right", "enter", "back"])
        .output()
        .expect("Failed to run letter-slider replay");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON output");
    // left from nothing lands on z, right from z wraps to a
    assert_eq!(json["text"], "z");
    assert_eq!(json["letter"], "a");
}

#[test]
fn cli_replay_rejects_unknown_step() {
    let xdg = temp_xdg();
    let output = letter_slider_bin(&xdg)
        .args(["replay", "right", "jump"])
        .output()
        .expect("Failed to run letter-slider replay");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("step 2"), "stderr: {stderr}");
}
