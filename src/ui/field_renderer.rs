//! Field rendering utilities for the loan form

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a single-line form field.
///
/// `prefix` renders a fixed adornment ahead of the value (the currency
/// prefix on the amount fields); it is display-only and never part of the
/// stored value.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    prefix: Option<&str>,
    is_active: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let mut spans = Vec::with_capacity(3);
    if let Some(prefix) = prefix {
        spans.push(Span::styled(
            format!("{prefix} "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    spans.push(Span::styled(display_value, style));
    spans.push(Span::styled(cursor, Style::default().fg(Color::Cyan)));

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
