//! CLI commands
//!
//! Non-interactive commands: script replay and config validation.

use color_eyre::eyre::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::alphabet::Alphabet;
use crate::config::Config;
use crate::script::{self, ReplayOutcome};
use crate::style::SliderStyle;

/// Load the config from `path`, or from the XDG default when `None`
///
/// # Errors
/// Returns an error if the config cannot be loaded or is invalid.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Replay `steps` and print the outcome
///
/// # Errors
/// Returns an error if a step cannot be parsed or JSON serialization fails.
pub fn replay(config: &Config, steps: &[String], json_output: bool) -> Result<()> {
    let steps = script::parse_script(steps)?;
    debug!(steps = steps.len(), "replaying script");
    let outcome = script::replay(&steps, &config.gamepad);

    if json_output {
        let json = serde_json::to_string_pretty(&outcome).context("Failed to serialize outcome")?;
        println!("{json}");
    } else {
        print!("{}", format_outcome(&outcome));
    }
    Ok(())
}

/// Human-readable replay summary: the alphabet with the cursor marked, then the text
#[must_use]
pub fn format_outcome(outcome: &ReplayOutcome) -> String {
    let alphabet = Alphabet::new();
    let mut row = String::with_capacity(alphabet.len() * 12);
    for (i, letter) in alphabet.letters().iter().enumerate() {
        if outcome.cursor == Some(i) {
            row.push_str(&format!("[{}]", letter.to_string().letter()));
        } else {
            row.push(' ');
            row.push(*letter);
            row.push(' ');
        }
    }

    let cursor = match (outcome.cursor, outcome.letter) {
        (Some(index), Some(letter)) => format!("{letter} (index {index})"),
        _ => "none".to_string(),
    };

    format!(
        "{row}\n{} {}\n{} {}\n",
        "Cursor:".header(),
        cursor.technical(),
        "Text:".header(),
        format!("{:?}", outcome.text).success(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_outcome_mentions_cursor_and_text() {
        let outcome = ReplayOutcome {
            text: "ab".to_string(),
            cursor: Some(1),
            letter: Some('b'),
            actions: 3,
        };
        let formatted = format_outcome(&outcome);
        assert!(formatted.contains("b (index 1)"));
        assert!(formatted.contains("\"ab\""));
        assert!(formatted.starts_with(" a ["));
    }

    #[test]
    fn test_format_outcome_without_cursor() {
        let outcome = ReplayOutcome {
            text: String::new(),
            cursor: None,
            letter: None,
            actions: 0,
        };
        assert!(format_outcome(&outcome).contains("none"));
    }
}
