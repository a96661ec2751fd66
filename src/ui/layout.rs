//! Layout components (panels and status bar)

use crate::app::App;
use crate::platform::{SAVE_DEFAULTS_SHORTCUT, SUBMIT_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout: form panel and preview panel
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Form
            Constraint::Percentage(45), // Preview
        ])
        .split(rows[0]);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Submittable indicator
    let gate = if app.controller.is_submitting() {
        Span::styled(" ◌ ", Style::default().fg(Color::Yellow))
    } else if app.controller.is_submittable() {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(gate);

    spans.push(Span::styled(
        format!(
            "Tab:next  F2:{} view  F3:{} card  {}:submit  {}:save prefs",
            app.controller.mode().toggle().label(),
            app.controller.style().toggle().label(),
            SUBMIT_SHORTCUT,
            SAVE_DEFAULTS_SHORTCUT,
        ),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_status_line() {
        let (form, preview) = create_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(form.height, 29);
        assert_eq!(preview.height, 29);
        assert_eq!(form.x, 0);
        assert_eq!(preview.x, form.width);
        assert_eq!(form.width + preview.width, 100);
    }
}
