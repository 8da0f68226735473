//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, status_area) = layout::create_layout(frame.area());

    forms::draw_contact_form(frame, form_area, app);
    layout::draw_status_bar(frame, status_area, app);

    if let Some(message) = &app.confirmation {
        components::render_success_dialog(frame, message);
    }
}
