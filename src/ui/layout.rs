//! Screen layout: header, form area, footer, status bar

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, form, footer, and status bar areas
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(18),   // Form
            Constraint::Length(2), // Footer
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2], chunks[3])
}

/// Draw the page header: title and tagline
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "✉ Get in Touch",
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "We'd love to hear from you. Send us a message and we'll respond as soon as possible.",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

/// Draw the footer with contact details
pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(vec![
        Line::from(Span::styled(
            "We typically respond within 24 hours",
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled(
                format!("📧 {}", app.config.contact_email()),
                Style::default().fg(Color::Gray),
            ),
            Span::styled("  •  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("📞 {}", app.config.contact_phone()),
                Style::default().fg(Color::Gray),
            ),
        ]),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Draw the status bar with any transient message
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(ref message) = app.state.status_message {
        Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ))
    } else if app.is_submitting() {
        Line::from(Span::styled(
            "Sending your message...",
            Style::default().fg(Color::Cyan),
        ))
    } else {
        Line::from(Span::styled(
            "All fields are required",
            Style::default().fg(Color::DarkGray),
        ))
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
