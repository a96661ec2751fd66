//! Listing editor form

use super::field_renderer::{draw_field, FieldView};
use crate::app::App;
use crate::state::{
    Field, FormFocus, ListingController, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS,
};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Label of the submit button for the current state
fn submit_label(controller: &ListingController) -> &'static str {
    if controller.is_submitting() {
        "Submitting..."
    } else {
        controller.mode().submit_label()
    }
}

fn field_view<'a>(app: &'a App, field: Field, category_display: &'a str) -> FieldView<'a> {
    let controller = &app.controller;
    let is_active = app.focus.field() == Some(field);
    let value = match field {
        Field::Category => category_display,
        _ => controller.draft().get(field),
    };
    let counter = match field {
        Field::Title => Some((value.chars().count(), TITLE_MAX_CHARS)),
        Field::Description => Some((value.chars().count(), DESCRIPTION_MAX_CHARS)),
        _ => None,
    };
    let empty_hint = match field {
        Field::Title | Field::Description => "(required)",
        Field::Price => "(required, e.g. 1234.50)",
        Field::ImageUrl => "(optional, https://.../photo.jpg)",
        Field::Category => "",
    };

    FieldView {
        label: field.label(),
        value,
        is_active,
        is_multiline: field == Field::Description,
        error: controller.errors().get(field).map(|e| e.to_string()),
        counter,
        empty_hint,
    }
}

/// Draw the listing form with its submit button
pub fn draw_listing_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" New Listing ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title
            Constraint::Min(6),                // Description
            Constraint::Length(3),             // Price
            Constraint::Length(3),             // Image URL
            Constraint::Length(3),             // Category
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .margin(1)
        .split(area);

    let category_display = format!("◀ {} ▶", app.controller.draft().category.label());

    let fields = [
        Field::Title,
        Field::Description,
        Field::Price,
        Field::ImageUrl,
        Field::Category,
    ];
    for (chunk, field) in chunks.iter().zip(fields) {
        draw_field(frame, *chunk, &field_view(app, field, &category_display));
    }

    render_button(
        frame,
        chunks[5],
        submit_label(&app.controller),
        app.focus == FormFocus::SubmitButton,
        app.controller.can_submit(),
        Color::Green,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StudioConfig;
    use crate::state::DisplayMode;

    #[test]
    fn test_submit_label_follows_mode() {
        let mut app = App::new(StudioConfig::default());
        assert_eq!(submit_label(&app.controller), "Publish Listing");
        app.controller.set_mode(DisplayMode::Buyer);
        assert_eq!(submit_label(&app.controller), "Submit Listing");
    }

    #[test]
    fn test_field_view_carries_inline_error() {
        let mut app = App::new(StudioConfig::default());
        app.controller.set_field(Field::Price, "abc").unwrap();
        let view = field_view(&app, Field::Price, "");
        assert_eq!(view.error.as_deref(), Some("Price must be a number"));
        assert!(view.counter.is_none());
    }

    #[test]
    fn test_field_view_counts_title_characters() {
        let mut app = App::new(StudioConfig::default());
        app.controller.set_field(Field::Title, "Desk").unwrap();
        let view = field_view(&app, Field::Title, "");
        assert_eq!(view.counter, Some((4, TITLE_MAX_CHARS)));
        assert!(view.is_active);
    }

    #[test]
    fn test_category_uses_display_value() {
        let app = App::new(StudioConfig::default());
        let view = field_view(&app, Field::Category, "◀ Electronics ▶");
        assert_eq!(view.value, "◀ Electronics ▶");
        assert!(view.error.is_none());
    }
}
