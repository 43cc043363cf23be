//! Reusable UI components

mod button;
mod notice_dialog;

pub use button::{render_button, BUTTON_HEIGHT};
pub use notice_dialog::render_confirmation;
