use ratatui::{Terminal, backend::TestBackend};

use super::make_app;
use crate::action::{Action, Direction};
use crate::tui::app::App;
use crate::tui::render_ui;

fn render(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(90, 24)).expect("test terminal");
    terminal
        .draw(|frame| render_ui(frame, app))
        .expect("draw should succeed");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn renders_full_alphabet_and_field_name() {
    let mut app = make_app();
    let screen = render(&mut app);

    assert!(screen.contains(" a  b  c "));
    assert!(screen.contains(" x  y  z "));
    assert!(screen.contains("No letter selected"));
    assert!(screen.contains("test"), "text field is titled with field_name");
    assert!(screen.contains("No gamepad connected"));
}

#[test]
fn renders_active_letter_and_text() {
    let mut app = make_app();
    app.apply_action(Action::Rotate(Direction::Left));
    app.apply_action(Action::WriteText);
    let screen = render(&mut app);

    assert!(screen.contains("Active: z"));
}

#[test]
fn renders_unavailable_gamepad_reason() {
    let mut app = make_app();
    app.gamepad_unavailable("Gamepad support not enabled".to_string());
    let screen = render(&mut app);
    assert!(screen.contains("Gamepad support not enabled"));
}

#[test]
fn help_overlay_lists_button_bindings() {
    let mut app = make_app();
    app.toggle_help();
    let screen = render(&mut app);
    assert!(screen.contains("[button 1] right"));
    assert!(screen.contains("[button 5] write"));
}
