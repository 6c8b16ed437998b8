//! Shared TUI widget helpers

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tui_input::Input;

use crate::style::colors;

/// Width of one letter cell in the slider row
pub(crate) const LETTER_CELL_WIDTH: usize = 3;

/// Helper to create centered rect for modals
///
/// # Arguments
/// * `percent_x` - Width as percentage of screen (0-100)
/// * `percent_y` - Height as percentage of screen (0-100)
/// * `r` - The area to center within
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Get focus-aware border style
pub(crate) const fn focus_border_style(focused: bool) -> Style {
    if focused {
        Style::new().fg(colors::UI_BORDER_ACTIVE)
    } else {
        Style::new().fg(colors::UI_BORDER_INACTIVE)
    }
}

/// Render a text input field with a block and correct scrolling/cursor
pub(crate) fn render_input(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    input: &Input,
    focused: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_border_style(focused))
        .title(title);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let width = inner_area.width.max(1) as usize;
    let scroll = input.visual_scroll(width);

    let scroll_u16 = u16::try_from(scroll).unwrap_or(u16::MAX);
    let p = Paragraph::new(input.value()).scroll((0, scroll_u16));
    frame.render_widget(p, inner_area);

    if focused {
        let cursor_offset = input.visual_cursor().max(scroll) - scroll;
        let cursor_offset_u16 = u16::try_from(cursor_offset).unwrap_or(u16::MAX);
        frame.set_cursor_position((inner_area.x + cursor_offset_u16, inner_area.y));
    }
}

/// The two slider rows: letters, and each letter's index underneath
///
/// The active letter is highlighted; with no active letter all cells are plain.
pub(crate) fn letter_rows(letters: &[char], active: Option<usize>) -> (Line<'static>, Line<'static>) {
    let mut letter_spans = Vec::with_capacity(letters.len());
    let mut index_spans = Vec::with_capacity(letters.len());

    for (i, letter) in letters.iter().enumerate() {
        let style = if active == Some(i) {
            Style::default()
                .fg(colors::LETTER_ACTIVE)
                .bg(colors::LETTER_ACTIVE_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::LETTER_INACTIVE)
        };
        letter_spans.push(Span::styled(format!(" {letter} "), style));
        index_spans.push(Span::styled(
            format!("{i:>width$}", width = LETTER_CELL_WIDTH - 1) + " ",
            Style::default().fg(colors::LETTER_INDEX),
        ));
    }

    (Line::from(letter_spans), Line::from(index_spans))
}

/// Build a key hint line: `[key] action  [key] action`
pub(crate) fn key_hint_line(items: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(items.len() * 2);
    for (key, action) in items {
        spans.push(Span::styled(
            format!("[{key}]"),
            Style::default().fg(colors::UI_HIGHLIGHT),
        ));
        spans.push(Span::styled(
            format!(" {action}  "),
            Style::default().fg(Color::Gray),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_letter_rows_highlight_only_active() {
        let letters: Vec<char> = ('a'..='e').collect();
        let (row, indices) = letter_rows(&letters, Some(2));

        assert_eq!(line_text(&row), " a  b  c  d  e ");
        assert_eq!(line_text(&indices), " 0  1  2  3  4 ");
        let highlighted: Vec<usize> = row
            .spans
            .iter()
            .enumerate()
            .filter(|(_, s)| s.style.bg == Some(colors::LETTER_ACTIVE_BG))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(highlighted, vec![2]);
    }

    #[test]
    fn test_letter_rows_without_active() {
        let letters: Vec<char> = ('a'..='z').collect();
        let (row, indices) = letter_rows(&letters, None);
        assert!(row.spans.iter().all(|s| s.style.bg.is_none()));
        assert!(line_text(&indices).ends_with("25 "));
    }

    #[test]
    fn test_key_hint_line() {
        let line = key_hint_line(&[("Enter", "Write"), ("q", "Quit")]);
        assert_eq!(line_text(&line), "[Enter] Write  [q] Quit  ");
    }
}
