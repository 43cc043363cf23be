//! Application state definitions

use super::forms::ContactForm;
use super::submission::{Receipt, Submission};

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// The contact form screen
    #[default]
    Form,
}

/// Top-level UI state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    /// The form draft being edited
    pub form: ContactForm,
    /// Simulated submission window
    pub submission: Submission,
    /// Receipt for the confirmation dialog; Some while the dialog is open
    pub confirmation: Option<Receipt>,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    /// Whether the submit control currently accepts activation
    pub fn can_submit(&self) -> bool {
        self.form.is_valid() && !self.submission.is_in_progress()
    }

    /// Whether a blocking dialog is covering the form
    pub fn dialog_open(&self) -> bool {
        self.confirmation.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::FieldId;

    fn filled_state() -> AppState {
        let mut state = AppState::default();
        for id in FieldId::ALL {
            state.form.field_mut(id).push_char('x');
        }
        state
    }

    #[test]
    fn test_default_view_is_form() {
        assert_eq!(AppState::default().current_view, View::Form);
    }

    #[test]
    fn test_cannot_submit_empty_form() {
        assert!(!AppState::default().can_submit());
    }

    #[test]
    fn test_can_submit_when_valid_and_idle() {
        assert!(filled_state().can_submit());
    }

    #[test]
    fn test_cannot_submit_while_in_progress() {
        let mut state = filled_state();
        state.submission.begin();
        assert!(!state.can_submit());
    }

    #[test]
    fn test_dialog_open_tracks_confirmation() {
        let mut state = AppState::default();
        assert!(!state.dialog_open());
        state.confirmation = Some(Receipt::new());
        assert!(state.dialog_open());
    }
}
