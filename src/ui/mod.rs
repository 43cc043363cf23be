//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, form_area, footer_area, status_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area);

    match &app.state.current_view {
        View::Form => forms::draw_contact_form(frame, form_area, app),
    }

    layout::draw_footer(frame, footer_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Blocking confirmation notice on top of everything
    if let Some(ref receipt) = app.state.confirmation {
        components::render_confirmation(frame, receipt);
    }
}
