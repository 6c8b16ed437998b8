//! Input mapping
//!
//! Keyboard keys and gamepad buttons are translated into [`Action`]s so both
//! devices drive the slider through the same entry point.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Direction of a cursor step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Something the slider can do in response to input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor one letter
    Rotate(Direction),
    /// Append the active letter to the text buffer
    WriteText,
    /// Drop the last character of the text buffer
    RemoveText,
}

impl Action {
    /// Short lowercase name used in logs and script output
    pub const fn name(self) -> &'static str {
        match self {
            Action::Rotate(Direction::Left) => "left",
            Action::Rotate(Direction::Right) => "right",
            Action::WriteText => "write",
            Action::RemoveText => "remove",
        }
    }
}

/// Map a key press to a slider action
///
/// Up and Down are recognized but inert. Keys carrying Ctrl or Alt are left to
/// the caller (they are application shortcuts, not letter input).
#[must_use]
pub fn key_action(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Right => Some(Action::Rotate(Direction::Right)),
        KeyCode::Left => Some(Action::Rotate(Direction::Left)),
        KeyCode::Enter => Some(Action::WriteText),
        KeyCode::Backspace => Some(Action::RemoveText),
        KeyCode::Up | KeyCode::Down => None,
        _ => None,
    }
}

/// Highest button index in the standard gamepad layout
pub const MAX_BUTTON: u8 = 16;

/// Gamepad button numbers (standard layout) bound to slider actions
///
/// Buttons not listed here are inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonMap {
    pub rotate_right: u8,
    pub rotate_left: u8,
    pub remove: u8,
    pub write: u8,
}

impl Default for ButtonMap {
    fn default() -> Self {
        Self {
            rotate_right: 1,
            rotate_left: 2,
            remove: 4,
            write: 5,
        }
    }
}

impl ButtonMap {
    /// Action bound to `button`, if any
    #[must_use]
    pub fn action_for(&self, button: u8) -> Option<Action> {
        if button == self.rotate_right {
            Some(Action::Rotate(Direction::Right))
        } else if button == self.rotate_left {
            Some(Action::Rotate(Direction::Left))
        } else if button == self.remove {
            Some(Action::RemoveText)
        } else if button == self.write {
            Some(Action::WriteText)
        } else {
            None
        }
    }

    /// All bindings as `(button, action)`, ordered by button number
    #[must_use]
    pub fn bindings(&self) -> Vec<(u8, Action)> {
        let mut bindings = vec![
            (self.rotate_right, Action::Rotate(Direction::Right)),
            (self.rotate_left, Action::Rotate(Direction::Left)),
            (self.remove, Action::RemoveText),
            (self.write, Action::WriteText),
        ];
        bindings.sort_by_key(|(button, _)| *button);
        bindings
    }
}
