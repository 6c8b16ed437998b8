//! Text field state backed by `tui-input`
//!
//! The slider writes into this field through [`TextSink`]; the field itself only
//! renders and owns the text.

use tui_input::Input;

use crate::text::TextSink;

/// Wrapper around `tui-input::Input` for the letter field
#[derive(Debug, Clone, Default)]
pub(crate) struct EditorState {
    pub(crate) input: Input,
}

impl EditorState {
    /// Create an empty field with cursor at position 0
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
        }
    }

    /// Create from an existing string and place cursor at the end
    #[cfg(test)]
    #[must_use]
    pub(crate) fn from_string(s: String) -> Self {
        Self {
            input: Input::new(s),
        }
    }

    /// Get the current text value
    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }

    /// Set the text value (replacing current input state)
    pub(crate) fn set_value(&mut self, s: String) {
        self.input = Input::new(s);
    }
}

impl TextSink for EditorState {
    fn push_char(&mut self, c: char) {
        let mut value = self.value().to_string();
        value.push(c);
        self.set_value(value);
    }

    fn pop_char(&mut self) -> Option<char> {
        let mut value = self.value().to_string();
        let removed = value.pop();
        if removed.is_some() {
            self.set_value(value);
        }
        removed
    }

    fn as_str(&self) -> &str {
        self.value()
    }
}
