//! Letter Slider
//!
//! An on-screen alphabet picker: arrow keys or gamepad buttons move an active-letter
//! cursor across the letters a–z, and the selected letter is appended to (or the last
//! character removed from) a text field.
//!
//! # Features
//! - Circular cursor over a fixed 26-letter alphabet
//! - Keyboard and gamepad input funneled into the same controller actions
//! - Gamepad polling on a fixed interval, cancelled when the pad disconnects
//! - Headless action replay for scripting and testing
//! - Terminal UI with a live log pane
//!
//! # Cargo features
//! - `tui` (default): the interactive terminal UI.
//! - `gamepad`: reads real gamepads through `gilrs`. It is off by default because
//!   `gilrs` links against libudev on Linux. Without it the TUI reports gamepads
//!   as unavailable and runs keyboard-only, while the poller, the button map and
//!   `replay` with `pad:N` steps still work. Build with `--features gamepad` to
//!   drive the slider from a pad.

pub mod action;
pub mod alphabet;
pub mod cli;
pub mod commands;
pub mod config;
pub mod gamepad;
pub mod script;
pub mod slider;
pub mod style;
pub mod text;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types for convenience
pub use action::{Action, Direction};
pub use cli::Args;
pub use config::Config;
pub use slider::LetterSlider;
pub use text::TextSink;

#[allow(clippy::needless_raw_string_hashes, clippy::doc_markdown)]
mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

/// Version string shown in the TUI header (`0.1.0` or `0.1.0-debug`)
#[must_use]
pub fn version_string() -> String {
    if built_info::PROFILE == "release" {
        built_info::PKG_VERSION.to_string()
    } else {
        format!("{}-{}", built_info::PKG_VERSION, built_info::PROFILE)
    }
}
