//! Configuration management
//!
//! Handles loading, parsing, and validating the TOML configuration file.
//! Covers general settings and the gamepad button bindings.

use color_eyre::eyre::{self, Context, ContextCompat, Result};
use crossterm::style::Stylize;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::action::{ButtonMap, MAX_BUTTON};
use crate::style::SliderStyle;

/// Longest accepted gamepad poll interval
const MAX_POLL_INTERVAL_MS: u64 = 5_000;

// ============================================================================
// Public Configuration Types
// ============================================================================

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub settings: Settings,
    pub gamepad: ButtonMap,
}

/// Global settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Name shown on the text field the letters are written into
    pub field_name: String,
    /// Gamepad button poll interval in milliseconds
    pub poll_interval_ms: u64,
    /// Open the TUI with the log pane visible
    pub show_logs: bool,
    pub log_level: String,
}

impl Settings {
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_config_file(ConfigFile::default())
    }
}

// ============================================================================
// Config File Deserialization (TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    settings: SettingsFile,
    #[serde(default)]
    gamepad: GamepadFile,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    #[serde(default = "default_field_name")]
    field_name: String,
    #[serde(default = "default_poll_interval_ms")]
    poll_interval_ms: u64,
    #[serde(default)]
    show_logs: bool,
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GamepadFile {
    #[serde(default = "default_rotate_right")]
    rotate_right: u8,
    #[serde(default = "default_rotate_left")]
    rotate_left: u8,
    #[serde(default = "default_remove")]
    remove: u8,
    #[serde(default = "default_write")]
    write: u8,
}

fn default_field_name() -> String {
    "test".to_string()
}

fn default_poll_interval_ms() -> u64 {
    200
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_rotate_right() -> u8 {
    ButtonMap::default().rotate_right
}

fn default_rotate_left() -> u8 {
    ButtonMap::default().rotate_left
}

fn default_remove() -> u8 {
    ButtonMap::default().remove
}

fn default_write() -> u8 {
    ButtonMap::default().write
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self {
            field_name: default_field_name(),
            poll_interval_ms: default_poll_interval_ms(),
            show_logs: false,
            log_level: default_log_level(),
        }
    }
}

impl Default for GamepadFile {
    fn default() -> Self {
        let map = ButtonMap::default();
        Self {
            rotate_right: map.rotate_right,
            rotate_left: map.rotate_left,
            remove: map.remove,
            write: map.write,
        }
    }
}

// ============================================================================
// Config Implementation
// ============================================================================

impl Config {
    /// Load configuration from the default XDG config path
    ///
    /// Writes a commented default config first if none exists.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created, read, parsed, or fails validation.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Creating default config at {:?}", config_path);
            Self::create_default_config(&config_path)?;
        }

        Self::load_from_path(&config_path)
    }

    /// Load and validate configuration from an explicit path
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or a value is out of range.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config_file: ConfigFile =
            toml::from_str(contents).context("Failed to parse config TOML")?;
        let config = Self::from_config_file(config_file);
        config.validate()?;
        Ok(config)
    }

    fn from_config_file(config_file: ConfigFile) -> Self {
        let settings = Settings {
            field_name: config_file.settings.field_name,
            poll_interval_ms: config_file.settings.poll_interval_ms,
            show_logs: config_file.settings.show_logs,
            log_level: config_file.settings.log_level,
        };

        let gamepad = ButtonMap {
            rotate_right: config_file.gamepad.rotate_right,
            rotate_left: config_file.gamepad.rotate_left,
            remove: config_file.gamepad.remove,
            write: config_file.gamepad.write,
        };

        Config { settings, gamepad }
    }

    /// Check value ranges and binding conflicts
    ///
    /// # Errors
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<()> {
        match self.settings.log_level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            level => eyre::bail!(
                "Invalid log_level '{level}'. Must be: error, warn, info, debug, or trace"
            ),
        }

        if self.settings.field_name.trim().is_empty() {
            eyre::bail!("field_name must not be empty");
        }

        match self.settings.poll_interval_ms {
            0 => eyre::bail!("poll_interval_ms must be greater than 0"),
            ms if ms > MAX_POLL_INTERVAL_MS => eyre::bail!(
                "poll_interval_ms {ms} is too large (max {MAX_POLL_INTERVAL_MS})"
            ),
            _ => {}
        }

        let mut seen = HashSet::with_capacity(4);
        for (button, action) in self.gamepad.bindings() {
            if button > MAX_BUTTON {
                eyre::bail!(
                    "Gamepad button {button} for '{}' is out of range (0-{MAX_BUTTON})",
                    action.name()
                );
            }
            if !seen.insert(button) {
                eyre::bail!("Gamepad button {button} is bound to more than one action");
            }
        }

        Ok(())
    }

    /// Get the XDG config path for Letter Slider
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined or created.
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("letter-slider");
        fs::create_dir_all(&config_dir)
            .with_context(|| format!("Failed to create config dir: {}", config_dir.display()))?;
        Ok(config_dir.join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<()> {
        let default_config = r#"# Letter Slider Configuration
#
# Move the cursor with the arrow keys (or gamepad), press Enter to write the
# active letter, Backspace to remove the last one.

[settings]
field_name = "test"        # Title of the text field letters are written into
poll_interval_ms = 200     # How often gamepad buttons are read while a pad is connected
show_logs = false          # Start the TUI with the log pane open (toggle with 'l')
log_level = "info"         # error, warn, info, debug, trace

# Gamepad bindings (standard button layout, 0-16)
# Held buttons repeat on every poll. Unbound buttons do nothing.
[gamepad]
rotate_right = 1
rotate_left = 2
remove = 4
write = 5
"#;
        fs::write(path, default_config)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;

        eprintln!("Created default config at: {}", path.display());
        Ok(())
    }

    /// Print a human-readable summary of the configuration
    pub fn print_summary(&self) {
        println!("{}\n", "✓ Configuration valid".success());

        println!("{}", "Settings:".header());
        println!("  field_name: {}", self.settings.field_name.as_str().technical());
        println!("  poll_interval_ms: {}", self.settings.poll_interval_ms.to_string().technical());
        println!("  show_logs: {}", self.settings.show_logs);
        println!("  log_level: {}", self.settings.log_level);

        println!("\n{}", "Gamepad:".header());
        for (button, action) in self.gamepad.bindings() {
            println!("  button {}: {}", button.to_string().technical(), action.name());
        }

        if let Ok(path) = Self::get_config_path() {
            println!("\n{} {}", "Config:".dim(), path.display());
        }
    }
}
