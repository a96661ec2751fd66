//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Everything needed to draw one form field
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub is_active: bool,
    pub is_multiline: bool,
    /// Inline validation message
    pub error: Option<String>,
    /// Character usage as (used, limit)
    pub counter: Option<(usize, usize)>,
    /// Text shown when the field is empty and not focused
    pub empty_hint: &'a str,
}

fn field_title(field: &FieldView) -> String {
    match field.counter {
        Some((used, limit)) => format!(" {} ({used}/{limit}) ", field.label),
        None => format!(" {} ", field.label),
    }
}

/// Draw a form field with its border, cursor and inline error
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldView) {
    let accent = match (&field.error, field.is_active) {
        (Some(_), _) => Color::Red,
        (None, true) => Color::Cyan,
        (None, false) => Color::DarkGray,
    };

    let text_style = if field.is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if field.is_active { "▌" } else { "" };

    let content = if field.value.is_empty() && !field.is_active {
        Paragraph::new(Line::from(Span::styled(
            field.empty_hint,
            Style::default().fg(Color::DarkGray),
        )))
    } else if field.is_multiline {
        let mut lines: Vec<Line> = field
            .value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.value, text_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let mut block = Block::default()
        .title(field_title(field))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    if let Some(error) = &field.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(counter: Option<(usize, usize)>) -> FieldView<'static> {
        FieldView {
            label: "Title",
            value: "Desk",
            is_active: false,
            is_multiline: false,
            error: None,
            counter,
            empty_hint: "(empty)",
        }
    }

    #[test]
    fn test_title_includes_counter() {
        assert_eq!(field_title(&view(Some((4, 50)))), " Title (4/50) ");
    }

    #[test]
    fn test_title_without_counter() {
        assert_eq!(field_title(&view(None)), " Title ");
    }
}
