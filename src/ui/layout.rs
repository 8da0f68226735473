//! Layout components (form area, status bar)

use super::forms::FORM_MAX_WIDTH;
use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{FieldName, InputKind};
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into a centered form column and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Max(FORM_MAX_WIDTH)])
        .flex(Flex::Center)
        .split(rows[0]);

    (columns[0], rows[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    let hints = get_focus_hints(app.form.focused_field());
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if !app.form.can_submit() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Submit (consent required)",
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(msg) = &app.status_message {
        let color = if app.form.errors.is_empty() {
            Color::Green
        } else {
            Color::Red
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused control
fn get_focus_hints(focused: Option<FieldName>) -> String {
    match focused.map(FieldName::input_kind) {
        None => format!("Enter:submit  Tab:next  {RESET_SHORTCUT}:reset"),
        Some(InputKind::Radio) => "←/→:move  Space:select  Tab:next".to_string(),
        Some(InputKind::Checkbox) => format!("Space:toggle  Tab:next  {SUBMIT_SHORTCUT}:submit"),
        Some(InputKind::TextArea) => {
            format!("Enter:newline  Tab:next  {SUBMIT_SHORTCUT}:submit  {RESET_SHORTCUT}:reset")
        }
        Some(InputKind::Text | InputKind::Email) => {
            format!("Tab:next  {SUBMIT_SHORTCUT}:submit  {RESET_SHORTCUT}:reset")
        }
    }
}
