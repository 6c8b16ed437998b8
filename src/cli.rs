//! Command-line interface definitions
//!
//! Uses clap for argument parsing with derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Letter Slider - pick letters from an on-screen alphabet
#[derive(Parser)]
#[command(name = "letter-slider")]
#[command(version)]
#[command(about = "Letter Slider - Pick letters from an on-screen alphabet with arrow keys or a gamepad")]
#[command(after_help = "\
KEYS:
  ←/→          Move the active letter (wraps from z to a and back)
  Enter        Append the active letter to the text field
  Backspace    Remove the last character
  l            Toggle the log pane
  ?            Help overlay
  q, Esc       Quit

GAMEPAD (default bindings, standard layout):
  button 1     Next letter
  button 2     Previous letter
  button 4     Remove last character
  button 5     Append active letter
  Buttons are polled every 200 ms while a pad is connected; held buttons repeat.
  Gamepad support requires building with --features gamepad.

SCRIPTS:
  letter-slider replay r r enter l l enter
  Steps: right|r, left|l, enter|write|w, back|remove|b, up, down, pad:N

CONFIG:
  $XDG_CONFIG_HOME/letter-slider/config.toml (created on first run)")]
pub struct Args {
    /// Use this config file instead of the XDG default
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Interactive letter picker (default)
    Tui,

    /// Replay a script of steps headlessly and print the result
    Replay {
        /// Steps, e.g. `right right enter` or `pad:1 pad:5`
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        steps: Vec<String>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Validate config file and print a summary
    Validate,
}
