//! Contact form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::Form;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the form fields, submit button, and help line
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let show_help = app.config.show_help();
    let help_height = if show_help { 1 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Full name
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Subject
            Constraint::Min(6),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Submit button
            Constraint::Length(help_height),   // Help text
        ])
        .margin(1)
        .split(area);

    let submitting = app.is_submitting();
    let border_color = if submitting {
        Color::DarkGray
    } else {
        Color::Cyan
    };

    let block = Block::default()
        .title(" Contact Us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let form = &app.state.form;
    for index in 0..4 {
        if let Some(field) = form.get_field(index) {
            draw_field(
                frame,
                chunks[index],
                field,
                form.active_position == index,
                submitting,
            );
        }
    }

    draw_submit_button(frame, chunks[4], app);

    if show_help {
        draw_help_line(frame, chunks[5]);
    }
}

fn draw_submit_button(frame: &mut Frame, area: Rect, app: &App) {
    // Narrow the button to the center of the row
    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(24),
            Constraint::Min(0),
        ])
        .split(area)[1];

    let label = if app.is_submitting() {
        format!("{} Sending...", app.state.submission.spinner_frame())
    } else {
        "➤ Send Message".to_string()
    };

    render_button(
        frame,
        button_area,
        &label,
        app.state.form.is_submit_row_active(),
        app.state.can_submit(),
        Color::Green,
    );
}

fn draw_help_line(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled(
            crate::platform::SUBMIT_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": send  "),
        Span::styled(
            crate::platform::COPY_EMAIL_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": copy email  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
