//! Confirmation notice dialog shown after a completed submission

use crate::state::Receipt;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const THANK_YOU: &str = "Thank you for your message!";
const FOLLOW_UP: &str = "We'll get back to you soon.";

/// Render the blocking confirmation notice over a cleared backdrop
pub fn render_confirmation(frame: &mut Frame, receipt: &Receipt) {
    let area = frame.area();

    let dialog_width = 46u16;
    let dialog_height = 10u16;

    // Center the dialog
    let dialog_x = area.x + (area.width.saturating_sub(dialog_width)) / 2;
    let dialog_y = area.y + (area.height.saturating_sub(dialog_height)) / 2;

    let dialog_area = Rect {
        x: dialog_x,
        y: dialog_y,
        width: dialog_width.min(area.width),
        height: dialog_height.min(area.height),
    };

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let reference_line = format!(
        "Reference {}  ·  {}",
        receipt.short_reference(),
        receipt.submitted_at.format("%H:%M UTC")
    );

    let content = vec![
        Line::from(Span::styled(
            "Message Sent",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(THANK_YOU, Style::default().fg(Color::White))),
        Line::from(Span::styled(FOLLOW_UP, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(
            reference_line,
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::styled(" dismiss", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let dialog = Paragraph::new(content)
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::new().bg(Color::Black).fg(Color::White));

    frame.render_widget(dialog, dialog_area);
}
