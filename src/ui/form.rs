//! Loan form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{FocusField, PersonType, SubmissionState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Currency adornment for the amount fields
const CURRENCY_PREFIX: &str = "R$";

/// Draw the loan request form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Person type
            Constraint::Length(3), // Document
            Constraint::Length(3), // Name
            Constraint::Length(3), // Current debt
            Constraint::Length(3), // Requested loan
            Constraint::Length(3), // Submit button
            Constraint::Min(3),    // Feedback
        ])
        .margin(1)
        .split(area);

    draw_header(frame, chunks[0]);
    draw_person_type(frame, chunks[1], app);

    let form = &app.state.form;
    let person_type = form.person_type;

    let document_label = format!(
        "{} {}",
        person_type.document_label(),
        person_type.document_mask().pattern()
    );
    draw_field(
        frame,
        chunks[2],
        &document_label,
        &form.document_display(),
        None,
        matches!(app.state.focus, FocusField::Document),
    );
    draw_field(
        frame,
        chunks[3],
        person_type.name_label(),
        &form.name,
        None,
        matches!(app.state.focus, FocusField::Name),
    );
    draw_field(
        frame,
        chunks[4],
        "Current debt",
        &form.current_debt,
        Some(CURRENCY_PREFIX),
        matches!(app.state.focus, FocusField::CurrentDebt),
    );
    draw_field(
        frame,
        chunks[5],
        "Requested loan",
        &form.requested_loan,
        Some(CURRENCY_PREFIX),
        matches!(app.state.focus, FocusField::RequestedLoan),
    );

    draw_submit_button(frame, chunks[6], app);
    draw_feedback(frame, chunks[7], app);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Loan Request",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Enter the details for your loan request",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Draw the person type selector as a radio row
fn draw_person_type(frame: &mut Frame, area: Rect, app: &App) {
    let is_active = matches!(app.state.focus, FocusField::PersonType);
    let selected = app.state.form.person_type;

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let radio = |person_type: PersonType| {
        let marker = if selected == person_type { "(•)" } else { "( )" };
        let style = if selected == person_type {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(format!("{marker} {}", person_type.label()), style)
    };

    let line = Line::from(vec![
        radio(PersonType::Individual),
        Span::raw("   "),
        radio(PersonType::Company),
    ]);

    let block = Block::default()
        .title(" Person type ")
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw the submit button, reflecting the gate and the in-flight state
fn draw_submit_button(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let is_selected = matches!(app.state.focus, FocusField::Submit);
    let is_enabled = form.can_submit();

    let content = if form.submission.is_in_flight() {
        "Submitting..."
    } else {
        "Request loan"
    };

    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_selected && is_enabled {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Draw the settlement feedback area
fn draw_feedback(frame: &mut Frame, area: Rect, app: &App) {
    let (title, message, color) = match &app.state.form.submission {
        SubmissionState::Idle => return,
        SubmissionState::InFlight => (" Status ", "Submitting...".to_string(), Color::Yellow),
        SubmissionState::Succeeded(message) => (" Success ", message.clone(), Color::Green),
        SubmissionState::Failed(message) => (" Error ", message.clone(), Color::Red),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph.block(block), area);
}
