//! TUI subsystem integration tests
//!
//! These live under `src/tui/` rather than top-level `tests/` because they need
//! `pub(crate)` internals: the text field state, `simulate_key_event()`, and the
//! render helpers.

mod render_tests;

use crate::config::Config;
use crate::tui::app::App;

/// App with default config; no terminal or XDG access
pub(super) fn make_app() -> App {
    App::with_config(Config::default())
}
