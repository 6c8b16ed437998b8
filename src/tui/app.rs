//! TUI application state
//!
//! Owns the slider, the text field it writes into, and the gamepad status shown
//! in the UI.

use throbber_widgets_tui::ThrobberState;
use tracing::info;

use super::editor_state::EditorState;
use crate::action::Action;
use crate::config::Config;
use crate::gamepad::DeviceEvent;
use crate::slider::LetterSlider;

/// Gamepad status as shown in the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GamepadStatus {
    /// No backend in this build or it failed to start
    Unavailable(String),
    /// Backend running, no pad connected
    Waiting,
    Connected { id: usize, name: String },
}

pub struct App {
    /// Configuration (loaded at startup)
    pub config: Config,
    /// Letter cursor
    pub slider: LetterSlider,
    /// Text field the letters are written into
    pub(crate) field: EditorState,
    /// Gamepad status for the status line
    pub gamepad: GamepadStatus,
    /// Whether the log pane is visible
    pub show_logs: bool,
    /// Whether to show help overlay
    pub show_help: bool,
    /// Whether the application should quit
    pub should_quit: bool,
    /// Status message to display (errors, confirmations)
    pub status_message: Option<String>,
    /// Whether the UI needs to be redrawn
    pub dirty: bool,
    throbber_state: ThrobberState,
}

impl App {
    /// Create app state from an already loaded config
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        let show_logs = config.settings.show_logs;
        Self {
            config,
            slider: LetterSlider::new(),
            field: EditorState::new(),
            gamepad: GamepadStatus::Waiting,
            show_logs,
            show_help: false,
            should_quit: false,
            status_message: None,
            dirty: true,
            throbber_state: ThrobberState::default(),
        }
    }

    /// Run one slider action against the text field
    pub fn apply_action(&mut self, action: Action) {
        self.slider.apply(action, &mut self.field);
        self.dirty = true;
    }

    /// Current text field contents
    #[cfg(test)]
    pub fn text(&self) -> &str {
        self.field.value()
    }

    /// Reflect a device event the poller accepted
    pub fn gamepad_event(&mut self, event: DeviceEvent) {
        match event {
            DeviceEvent::Connected { id, name } => self.gamepad_connected(id, name),
            DeviceEvent::Disconnected { id } => self.gamepad_disconnected(id),
        }
    }

    pub fn gamepad_connected(&mut self, id: usize, name: String) {
        self.set_status(format!("Gamepad connected: {name}"));
        self.gamepad = GamepadStatus::Connected { id, name };
    }

    /// Mark the tracked pad as gone
    pub fn gamepad_disconnected(&mut self, id: usize) {
        if matches!(self.gamepad, GamepadStatus::Connected { id: current, .. } if current == id) {
            self.gamepad = GamepadStatus::Waiting;
            self.set_status("Gamepad disconnected".to_string());
        }
    }

    pub fn gamepad_unavailable(&mut self, reason: String) {
        info!("Gamepad input unavailable: {reason}");
        self.gamepad = GamepadStatus::Unavailable(reason);
        self.dirty = true;
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
        self.dirty = true;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.dirty = true;
    }

    /// Set a status message to display to the user
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.dirty = true;
    }

    /// Clear the current status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.dirty = true;
    }

    /// Request application quit
    pub fn quit(&mut self) {
        self.should_quit = true;
        self.dirty = true;
    }

    /// Get the current status message
    pub fn status_message(&self) -> Option<&String> {
        self.status_message.as_ref()
    }

    pub fn throbber_state_mut(&mut self) -> &mut ThrobberState {
        &mut self.throbber_state
    }
}
