//! Headless action scripts
//!
//! A script is a whitespace-separated list of steps replayed against a fresh
//! slider and an empty buffer:
//!
//! | Token | Effect |
//! |---|---|
//! | `right`, `r` | rotate right |
//! | `left`, `l` | rotate left |
//! | `enter`, `write`, `w` | write the active letter |
//! | `back`, `remove`, `b` | remove the last character |
//! | `up`, `down` | recognized, no effect |
//! | `pad:N` | press gamepad button N once (through the button map) |

use color_eyre::eyre::{self, Result};
use serde::Serialize;
use std::str::FromStr;

use crate::action::{Action, ButtonMap, Direction, MAX_BUTTON};
use crate::slider::LetterSlider;

/// One parsed script step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Action(Action),
    /// Up/Down: accepted, does nothing
    Inert,
    /// Gamepad button press for one poll
    Pad(u8),
}

impl FromStr for Step {
    type Err = eyre::Report;

    fn from_str(token: &str) -> Result<Self> {
        let lower = token.to_ascii_lowercase();
        let step = match lower.as_str() {
            "right" | "r" => Step::Action(Action::Rotate(Direction::Right)),
            "left" | "l" => Step::Action(Action::Rotate(Direction::Left)),
            "enter" | "write" | "w" => Step::Action(Action::WriteText),
            "back" | "remove" | "b" => Step::Action(Action::RemoveText),
            "up" | "down" => Step::Inert,
            other => {
                let Some(number) = other.strip_prefix("pad:") else {
                    eyre::bail!("unknown step '{token}'");
                };
                let button: u8 = number
                    .parse()
                    .map_err(|_| eyre::eyre!("invalid gamepad button in '{token}'"))?;
                if button > MAX_BUTTON {
                    eyre::bail!("gamepad button {button} is out of range (0-{MAX_BUTTON})");
                }
                Step::Pad(button)
            }
        };
        Ok(step)
    }
}

/// Parse script arguments; each argument may hold several whitespace-separated steps
///
/// # Errors
/// Returns an error naming the 1-based position of the first bad step.
pub fn parse_script<S: AsRef<str>>(args: &[S]) -> Result<Vec<Step>> {
    args.iter()
        .flat_map(|arg| arg.as_ref().split_whitespace())
        .enumerate()
        .map(|(i, token)| {
            token
                .parse::<Step>()
                .map_err(|e| eyre::eyre!("step {}: {e}", i + 1))
        })
        .collect()
}

/// Final state after replaying a script
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayOutcome {
    /// Contents of the text buffer
    pub text: String,
    /// Active index, `None` if the cursor never moved
    pub cursor: Option<usize>,
    pub letter: Option<char>,
    /// Number of steps that resolved to a slider action
    pub actions: usize,
}

/// Replay `steps` on a fresh slider with an empty buffer
#[must_use]
pub fn replay(steps: &[Step], map: &ButtonMap) -> ReplayOutcome {
    let mut slider = LetterSlider::new();
    let mut text = String::new();
    let mut actions = 0;

    for step in steps {
        let action = match *step {
            Step::Action(action) => Some(action),
            Step::Pad(button) => map.action_for(button),
            Step::Inert => None,
        };
        if let Some(action) = action {
            slider.apply(action, &mut text);
            actions += 1;
        }
    }

    ReplayOutcome {
        text,
        cursor: slider.active_index(),
        letter: slider.active_letter(),
        actions,
    }
}
