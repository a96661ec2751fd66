//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod preview;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Form on the left, preview card on the right
    let (form_area, preview_area) = layout::create_layout(area);

    forms::draw_listing_form(frame, form_area, app);
    preview::draw(frame, preview_area, &app.controller.preview(), app.controller.mode());

    layout::draw_status_bar(frame, app);

    if let Some(receipt) = &app.notice {
        components::render_success_dialog(frame, receipt);
    }
}
