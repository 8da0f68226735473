//! Field rendering utilities for forms

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

/// Border style for a field: errors win over focus
fn border_style(is_active: bool, has_error: bool) -> Style {
    if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a text input box
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    is_multiline: bool,
    has_error: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };
    let cursor = if is_active { CURSOR } else { "" };

    let content = if is_multiline {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, has_error));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// One radio button in a group
pub struct RadioOption<'a> {
    pub label: &'a str,
    pub selected: bool,
    pub highlighted: bool,
}

/// Draw a label line followed by one bordered box per option
pub fn draw_radio_group(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    options: &[RadioOption<'_>],
    is_active: bool,
    has_error: bool,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let label_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };
    frame.render_widget(Paragraph::new(Span::styled(label, label_style)), rows[0]);

    if options.is_empty() {
        return;
    }
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, options.len() as u32);
            options.len()
        ])
        .split(rows[1]);

    for (option, cell) in options.iter().zip(columns.iter()) {
        let marker = if option.selected { "(•)" } else { "( )" };
        let focused = is_active && option.highlighted;
        let text_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(focused, has_error));
        let paragraph = Paragraph::new(format!("{marker} {}", option.label))
            .style(text_style)
            .block(block);
        frame.render_widget(paragraph, *cell);
    }
}

/// Draw a checkbox field
pub fn draw_checkbox_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    checked: bool,
    is_active: bool,
    has_error: bool,
) {
    let checkbox = if checked { "[x]" } else { "[ ]" };
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_active, has_error));

    let paragraph = Paragraph::new(format!("{checkbox} {label}"))
        .style(style)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Draw the inline error message under a field, if any
pub fn draw_error_message(frame: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(message) = error {
        let line = Paragraph::new(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(line, area);
    }
}

/// Draw keyboard help text
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)));
    frame.render_widget(help, area);
}
