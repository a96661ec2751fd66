//! Preview card rendering

use crate::state::{Affordance, Badge, DisplayMode, ImageSource, PreviewView, Typography};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Styles for title and price at a typography level
fn typography_styles(typography: Typography) -> (Style, Style) {
    match typography {
        Typography::Standard => (
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Green),
        ),
        Typography::Prominent => (
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

fn badge_spans(badges: &[Badge]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for badge in badges {
        let style = match badge {
            Badge::Category(_) => Style::default().fg(Color::Black).bg(Color::Blue),
            Badge::Featured => Style::default().fg(Color::Black).bg(Color::Yellow),
        };
        let text = match badge {
            Badge::Featured => format!(" ★ {} ", badge.label()),
            Badge::Category(_) => format!(" {} ", badge.label()),
        };
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(text, style));
    }
    spans
}

fn image_lines(image: &ImageSource) -> Vec<Line<'static>> {
    match image {
        ImageSource::Placeholder => vec![
            Line::from(Span::styled("▧▧▧", Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(
                "No image",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        source => vec![
            Line::from(Span::styled("🖼", Style::default().fg(Color::Cyan))),
            Line::from(Span::styled(
                source.url().unwrap_or_default().to_string(),
                Style::default().fg(Color::Cyan),
            )),
        ],
    }
}

fn posted_on_text(affordance: Affordance) -> Option<String> {
    match affordance {
        Affordance::PostedOn(date) => Some(format!("Posted on {}", date.format("%b %-d, %Y"))),
        Affordance::ContactSeller => None,
    }
}

/// Draw the preview card for the current projection
pub fn draw(frame: &mut Frame, area: Rect, view: &PreviewView, mode: DisplayMode) {
    let (border_type, border_color) = match view.typography {
        Typography::Standard => (BorderType::Plain, Color::Gray),
        Typography::Prominent => (BorderType::Double, Color::Yellow),
    };

    let block = Block::default()
        .title(format!(" Preview · {} view ", mode.label()))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // Image
            Constraint::Length(1),             // Badges
            Constraint::Length(2),             // Title
            Constraint::Length(1),             // Price
            Constraint::Min(2),                // Description
            Constraint::Length(BUTTON_HEIGHT), // Affordance
        ])
        .margin(1)
        .split(inner);

    let image = Paragraph::new(image_lines(&view.image))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(image, chunks[0]);

    frame.render_widget(Paragraph::new(Line::from(badge_spans(&view.badges))), chunks[1]);

    let (title_style, price_style) = typography_styles(view.typography);
    let title_style = if view.title_is_placeholder {
        title_style.fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
    } else {
        title_style
    };
    frame.render_widget(
        Paragraph::new(Span::styled(view.title.as_str(), title_style)).wrap(Wrap { trim: true }),
        chunks[2],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(view.price.as_str(), price_style)),
        chunks[3],
    );

    let description_style = if view.description_is_placeholder {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
    } else {
        Style::default().fg(Color::Gray)
    };
    frame.render_widget(
        Paragraph::new(view.description.as_str())
            .style(description_style)
            .wrap(Wrap { trim: false }),
        chunks[4],
    );

    match posted_on_text(view.affordance) {
        Some(text) => frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Right),
            chunks[5],
        ),
        None => render_button(frame, chunks[5], "Contact Seller", false, true, Color::Cyan),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Category;
    use chrono::NaiveDate;

    #[test]
    fn test_posted_on_formats_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            posted_on_text(Affordance::PostedOn(date)).as_deref(),
            Some("Posted on Mar 9, 2024")
        );
        assert!(posted_on_text(Affordance::ContactSeller).is_none());
    }

    #[test]
    fn test_badge_spans_are_separated() {
        let spans = badge_spans(&[Badge::Category(Category::Books), Badge::Featured]);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].content, " Books ");
        assert_eq!(spans[2].content, " ★ Featured ");
    }

    #[test]
    fn test_remote_image_shows_url() {
        let lines = image_lines(&ImageSource::Remote("https://x.com/a.png".to_string()));
        assert_eq!(lines[1].spans[0].content, "https://x.com/a.png");
    }

    #[test]
    fn test_fallback_image_shows_fallback_url() {
        let lines = image_lines(&ImageSource::Fallback);
        assert_eq!(lines[1].spans[0].content, crate::state::FALLBACK_IMAGE_URL);
    }
}
