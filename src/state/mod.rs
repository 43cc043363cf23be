//! Application state

mod app_state;
pub mod forms;
mod submission;

pub use app_state::{AppState, View};
pub use forms::{ContactForm, FieldId, Form, FormField, SUBMIT_ROW};
pub use submission::{Receipt, Submission, DEFAULT_SUBMIT_DELAY};
