//! Input handling for keyboard events

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;
use crate::action::key_action;

/// Handle a terminal event
pub(crate) fn handle_event(app: &mut App, event: &Event) {
    match event {
        Event::Key(key_event) => handle_key_event(app, *key_event),
        Event::Resize(_, _) => {
            // Ratatui handles resize; just redraw
            app.dirty = true;
        }
        _ => {}
    }
}

/// Handle keyboard input
fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Only presses; some terminals also report releases
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Ctrl+C always quits immediately
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        app.quit();
        return;
    }

    // Help overlay swallows everything except its own toggles
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            app.toggle_help();
        }
        return;
    }

    if let Some(action) = key_action(&key) {
        app.apply_action(action);
        return;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Esc, _) => {
            if app.status_message().is_some() && key.code == KeyCode::Esc {
                app.clear_status();
            } else {
                app.quit();
            }
        }
        (KeyCode::Char('?'), KeyModifiers::NONE | KeyModifiers::SHIFT) => app.toggle_help(),
        (KeyCode::Char('l'), KeyModifiers::NONE) => app.toggle_logs(),
        _ => {}
    }
}

/// Test helper to simulate a key event without reading from the terminal
#[cfg(test)]
pub(crate) fn simulate_key_event(app: &mut App, key: KeyEvent) {
    handle_key_event(app, key);
}
