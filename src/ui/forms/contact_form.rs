//! Contact form rendering

use super::field_renderer::{
    draw_checkbox_field, draw_error_message, draw_help_text, draw_radio_group, draw_text_field,
    RadioOption,
};
use crate::app::App;
use crate::state::{FieldName, QueryType};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Widest the form gets, borders included
pub const FORM_MAX_WIDTH: u16 = 72;

const SUBMIT_WIDTH: u16 = 12;

/// Draw the contact form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Contact Us ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // First name
            Constraint::Length(1),             // error
            Constraint::Length(3),             // Last name
            Constraint::Length(1),             // error
            Constraint::Length(3),             // Email
            Constraint::Length(1),             // error
            Constraint::Length(4),             // Query type label + options
            Constraint::Length(1),             // error
            Constraint::Min(5),                // Message
            Constraint::Length(1),             // error
            Constraint::Length(3),             // Consent
            Constraint::Length(1),             // error
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // help
        ])
        .horizontal_margin(1)
        .split(inner);

    let form = &app.form;
    let focused = form.focused_field();
    let is_active = |field: FieldName| focused == Some(field);

    for (field, index) in [
        (FieldName::FirstName, 0),
        (FieldName::LastName, 2),
        (FieldName::Email, 4),
    ] {
        draw_text_field(
            frame,
            chunks[index],
            field.label(),
            form.data.text(field),
            is_active(field),
            false,
            form.errors.has_error(field),
        );
        draw_error_message(frame, chunks[index + 1], form.error_for(field));
    }

    let selected = form.selected_query_type();
    let options: Vec<RadioOption<'_>> = QueryType::ALL
        .iter()
        .enumerate()
        .map(|(i, option)| RadioOption {
            label: option.label(),
            selected: selected == Some(*option),
            highlighted: form.highlighted_option == i,
        })
        .collect();
    draw_radio_group(
        frame,
        chunks[6],
        FieldName::QueryType.label(),
        &options,
        is_active(FieldName::QueryType),
        form.errors.has_error(FieldName::QueryType),
    );
    draw_error_message(frame, chunks[7], form.error_for(FieldName::QueryType));

    draw_text_field(
        frame,
        chunks[8],
        FieldName::Message.label(),
        &form.data.message,
        is_active(FieldName::Message),
        true,
        form.errors.has_error(FieldName::Message),
    );
    draw_error_message(frame, chunks[9], form.error_for(FieldName::Message));

    draw_checkbox_field(
        frame,
        chunks[10],
        FieldName::Consent.label(),
        form.data.consent,
        is_active(FieldName::Consent),
        form.errors.has_error(FieldName::Consent),
    );
    draw_error_message(frame, chunks[11], form.error_for(FieldName::Consent));

    let button_area = Rect {
        width: SUBMIT_WIDTH.min(chunks[12].width),
        ..chunks[12]
    };
    render_button(
        frame,
        button_area,
        "Submit",
        form.is_submit_focused(),
        form.can_submit(),
    );

    if !form.can_submit() {
        draw_help_text(frame, chunks[13], "Submit is enabled once consent is given.");
    }
}
