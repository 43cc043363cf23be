//! Field rendering utilities for the contact form

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a single form field.
///
/// The focused field gets the cyan highlight and a block cursor; empty
/// unfocused fields show their placeholder. While a submission is in
/// flight every field renders disabled.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_focused: bool, disabled: bool) {
    let is_active = is_focused && !disabled;

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let (display, value_style) = if field.is_empty() && !is_active {
        (
            field.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        )
    } else if disabled {
        (field.value.clone(), Style::default().fg(Color::DarkGray))
    } else {
        (field.value.clone(), Style::default().fg(Color::White))
    };

    let cursor = Span::styled(if is_active { "▌" } else { "" }, Style::default().fg(Color::Cyan));

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans.push(cursor);
            } else {
                lines.push(Line::from(cursor));
            }
        } else if lines.is_empty() {
            lines.push(Line::from(Span::styled(display, value_style)));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![Span::styled(display, value_style), cursor]))
    };

    // Required marker matches the original form labels
    let block = Block::default()
        .title(format!(" {} * ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
