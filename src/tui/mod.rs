//! Terminal User Interface (TUI) for Letter Slider
//!
//! Renders the alphabet with the active letter highlighted, the text field the
//! letters are written into, gamepad status, and an optional log pane.

use crate::gamepad::{GamepadLink, GamepadPoller, PadState};
use crate::style::colors;
use color_eyre::eyre::{Context, Result};
use crossterm::cursor::Show;
use crossterm::event::EventStream;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures_util::StreamExt;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::io;
use tokio::sync::{mpsc, watch};

mod app;
mod editor_state;
mod input;
mod widgets;

#[cfg(test)]
mod tests;

use app::{App, GamepadStatus};
use input::handle_event;

/// Run the TUI application
///
/// # Errors
/// Returns an error if TUI initialization fails or terminal operations fail.
pub async fn run(config: crate::config::Config) -> Result<()> {
    // Install a panic hook to restore terminal on panic (best-effort).
    // Wraps the color-eyre hook installed by main.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen, Show);
        original_hook(info);
    }));

    // Gamepad backend before the alternate screen so startup errors stay readable in logs
    let mut app = App::with_config(config);
    let link = match crate::gamepad::spawn_backend_thread() {
        Ok(link) => Some(link),
        Err(e) => {
            app.gamepad_unavailable(format!("{e:#}"));
            None
        }
    };

    // Initialize terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Terminal guard to ensure we restore terminal state on panic/return
    struct TerminalGuard;
    impl Drop for TerminalGuard {
        fn drop(&mut self) {
            let _ = disable_raw_mode();
            let _ = execute!(std::io::stdout(), LeaveAlternateScreen, Show);
        }
    }
    let _term_guard = TerminalGuard;

    tracing::info!("Letter Slider started");

    let result = run_app(&mut terminal, &mut app, link).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Receive from an optional channel; pending forever when absent
async fn recv_opt<T>(rx: &mut Option<mpsc::UnboundedReceiver<T>>) -> Option<T> {
    match rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

/// Main application loop
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    link: Option<GamepadLink>,
) -> Result<()> {
    use std::time::Instant;

    // Frame rate constants
    const TARGET_FPS: u64 = 60;
    const MIN_FRAME_TIME_MS: u64 = 1000 / TARGET_FPS;
    const ANIM_MS: u64 = 120; // throbber frame every 120ms

    let mut last_frame = Instant::now();
    let mut last_anim = Instant::now();
    app.dirty = true;

    let mut tick = tokio::time::interval(std::time::Duration::from_millis(MIN_FRAME_TIME_MS));
    let mut events = EventStream::new();

    // Device events drive the poller; the poller's actions come back on `pad_actions`
    let (mut device_events, pad_state): (_, watch::Receiver<PadState>) = match link {
        Some(link) => (Some(link.events), link.state),
        None => (None, watch::channel(PadState::default()).1),
    };
    let (mut poller, mut pad_actions) = GamepadPoller::new(
        app.config.settings.poll_interval(),
        app.config.gamepad,
    );

    loop {
        tokio::select! {
            _ = tick.tick() => {
                let now = Instant::now();
                if now.duration_since(last_anim).as_millis() >= u128::from(ANIM_MS)
                    && matches!(app.gamepad, GamepadStatus::Connected { .. })
                {
                    app.throbber_state_mut().calc_next();
                    last_anim = now;
                    app.dirty = true;
                }
                // Log pane content changes without app events
                if app.show_logs {
                    app.dirty = true;
                }
            }
            Some(Ok(event)) = events.next() => {
                handle_event(app, &event);
            }
            maybe_device = recv_opt(&mut device_events) => {
                match maybe_device {
                    Some(event) => {
                        if poller.handle_device_event(&event, &pad_state) {
                            app.gamepad_event(event);
                        }
                    }
                    None => {
                        tracing::warn!("Gamepad backend stopped");
                        device_events = None;
                        if let Some(id) = poller.tracked() {
                            poller.disconnect(id);
                        }
                        app.gamepad_unavailable("gamepad backend stopped".to_string());
                    }
                }
            }
            Some(action) = pad_actions.recv() => {
                app.apply_action(action);
            }
        }

        if app.dirty {
            let now = Instant::now();
            if now.duration_since(last_frame).as_millis() >= u128::from(MIN_FRAME_TIME_MS) {
                terminal.draw(|frame| render_ui(frame, app))?;
                app.dirty = false;
                last_frame = now;
            }
            // If frame rate limited, dirty flag stays true so we render next tick
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the complete UI
fn render_ui(frame: &mut Frame, app: &mut App) {
    let size = frame.area();

    // [Header | Letters | Field | Gamepad | Logs/spacer | Footer]
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(size);

    render_header(frame, chunks[0]);
    render_letters(frame, chunks[1], app);
    widgets::render_input(
        frame,
        chunks[2],
        &app.config.settings.field_name,
        &app.field.input,
        true,
    );
    render_gamepad_line(frame, chunks[3], app);

    if app.show_logs {
        render_logs(frame, chunks[4]);
    }

    let status_clone = app.status_message().cloned();
    render_footer(frame, chunks[5], status_clone.as_ref());

    if app.show_help {
        render_help(frame, size, app);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let version = crate::version_string();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(vec![
            Span::raw("Letter Slider "),
            Span::raw(version),
        ]))
        .title_top(
            Line::from(vec![
                Span::styled("[?]", Style::default().fg(colors::UI_HIGHLIGHT)),
                Span::raw(" Help "),
            ])
            .alignment(Alignment::Right),
        );

    let text = Paragraph::new(widgets::key_hint_line(&[
        ("←→", "Move"),
        ("Enter", "Write"),
        ("Backspace", "Remove"),
    ]))
    .block(block);
    frame.render_widget(text, area);
}

fn render_letters(frame: &mut Frame, area: Rect, app: &App) {
    let (letters, indices) = widgets::letter_rows(app.slider.letters(), app.slider.active_index());

    let title = match app.slider.active_letter() {
        Some(letter) => Line::from(vec![
            Span::raw(" Active: "),
            Span::styled(
                letter.to_string(),
                Style::default()
                    .fg(colors::UI_WARNING)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ]),
        None => Line::from(" No letter selected "),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(widgets::focus_border_style(app.slider.active_index().is_some()))
        .title(title);
    frame.render_widget(Paragraph::new(vec![letters, indices]).block(block), area);
}

fn render_gamepad_line(frame: &mut Frame, area: Rect, app: &mut App) {
    use throbber_widgets_tui::Throbber;

    match app.gamepad.clone() {
        GamepadStatus::Connected { id, name } => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(3), Constraint::Min(0)])
                .split(area);

            let throb = Throbber::default().style(Style::default().fg(colors::UI_SUCCESS));
            frame.render_stateful_widget(throb, chunks[0], app.throbber_state_mut());

            let line = Line::from(vec![
                Span::styled("Gamepad ", Style::default().fg(colors::UI_SUCCESS)),
                Span::styled(name, Style::default().fg(colors::UI_TEXT)),
                Span::styled(
                    format!(" (#{id}, polling every {} ms)", app.config.settings.poll_interval_ms),
                    Style::default().fg(colors::UI_SECONDARY),
                ),
            ]);
            frame.render_widget(Paragraph::new(line), chunks[1]);
        }
        GamepadStatus::Waiting => {
            let line = Line::from(vec![
                Span::styled("○ ", Style::default().fg(colors::UI_SECONDARY)),
                Span::styled(
                    "No gamepad connected",
                    Style::default().fg(colors::UI_SECONDARY),
                ),
            ]);
            frame.render_widget(Paragraph::new(line), area);
        }
        GamepadStatus::Unavailable(reason) => {
            let line = Line::from(vec![
                Span::styled("✗ ", Style::default().fg(colors::UI_WARNING)),
                Span::styled(reason, Style::default().fg(colors::UI_SECONDARY)),
            ]);
            frame.render_widget(Paragraph::new(line), area);
        }
    }
}

fn render_logs(frame: &mut Frame, area: Rect) {
    use tui_logger::TuiLoggerWidget;

    let widget = TuiLoggerWidget::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::UI_BORDER_INACTIVE))
                .title(" Logs "),
        )
        .style_error(Style::default().fg(ratatui::style::Color::Red))
        .style_warn(Style::default().fg(colors::UI_WARNING))
        .style_info(Style::default().fg(colors::UI_SUCCESS))
        .style_debug(Style::default().fg(colors::UI_HIGHLIGHT))
        .output_target(false)
        .output_file(false)
        .output_line(false);
    frame.render_widget(widget, area);
}

fn render_footer(frame: &mut Frame, area: Rect, status_message: Option<&String>) {
    let text = if let Some(msg) = status_message {
        Line::from(vec![
            Span::styled("● ", Style::default().fg(colors::UI_WARNING)),
            Span::styled(msg, Style::default().fg(colors::UI_TEXT)),
        ])
    } else {
        widgets::key_hint_line(&[("q", "Quit"), ("l", "Logs"), ("?", "Help")])
    };
    frame.render_widget(Paragraph::new(text), area);
}

fn render_help(frame: &mut Frame, area: Rect, app: &App) {
    let popup = widgets::centered_rect(60, 60, area);
    frame.render_widget(Clear, popup);

    let mut lines = vec![
        Line::from(Span::styled(
            "Keyboard",
            Style::default()
                .fg(colors::UI_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
        widgets::key_hint_line(&[("←", "Previous letter"), ("→", "Next letter")]),
        widgets::key_hint_line(&[("Enter", "Write letter"), ("Backspace", "Remove last")]),
        widgets::key_hint_line(&[("l", "Toggle logs"), ("q/Esc", "Quit")]),
        Line::from(""),
        Line::from(Span::styled(
            "Gamepad",
            Style::default()
                .fg(colors::UI_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    for (button, action) in app.config.gamepad.bindings() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[button {button}]"),
                Style::default().fg(colors::UI_HIGHLIGHT),
            ),
            Span::raw(format!(" {}", action.name())),
        ]));
    }

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(widgets::focus_border_style(true))
            .title(" Help ")
            .title_bottom(Line::from(" [Esc] Close ").alignment(Alignment::Right)),
    );
    frame.render_widget(help, popup);
}
