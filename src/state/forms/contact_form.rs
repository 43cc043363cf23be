//! Contact form state

use super::field::{FieldId, FormField};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_position(&self) -> usize;
    fn set_active_position(&mut self, index: usize);
    fn next_position(&mut self) {
        let count = self.field_count();
        let current = self.active_position();
        self.set_active_position((current + 1) % count);
    }
    fn prev_position(&mut self) {
        let count = self.field_count();
        let current = self.active_position();
        if current == 0 {
            self.set_active_position(count - 1);
        } else {
            self.set_active_position(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The contact form: four text fields plus the submit row
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub full_name: FormField,
    pub email: FormField,
    pub subject: FormField,
    pub message: FormField,
    /// 0..=3 are fields, 4 is the submit row
    pub active_position: usize,
}

/// Index of the submit row within the form's tab order
pub const SUBMIT_ROW: usize = 4;

impl ContactForm {
    pub fn new() -> Self {
        Self {
            full_name: FormField::text(
                FieldId::FullName,
                "Full Name",
                "Enter your full name",
                false,
            ),
            email: FormField::text(
                FieldId::Email,
                "Email Address",
                "Enter your email address",
                false,
            ),
            subject: FormField::text(FieldId::Subject, "Subject", "What's this regarding?", false),
            message: FormField::text(
                FieldId::Message,
                "Message",
                "Tell us more about your inquiry...",
                true,
            ),
            active_position: 0,
        }
    }

    /// Returns true if the submit row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_position == SUBMIT_ROW
    }

    /// The field that currently has keyboard focus, if any.
    /// None while the submit row is active. Drives styling only.
    pub fn focused_field(&self) -> Option<FieldId> {
        self.get_field(self.active_position).map(|f| f.id)
    }

    /// All four fields are non-empty. Whitespace is not trimmed,
    /// presence of any character counts.
    pub fn is_valid(&self) -> bool {
        !self.full_name.is_empty()
            && !self.email.is_empty()
            && !self.subject.is_empty()
            && !self.message.is_empty()
    }

    /// Reset every field to its empty default and return to the first field
    pub fn reset(&mut self) {
        self.full_name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
        self.active_position = 0;
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::FullName => &self.full_name,
            FieldId::Email => &self.email,
            FieldId::Subject => &self.subject,
            FieldId::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::FullName => &mut self.full_name,
            FieldId::Email => &mut self.email,
            FieldId::Subject => &mut self.subject,
            FieldId::Message => &mut self.message,
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        5 // full_name, email, subject, message, submit row
    }
    fn active_position(&self) -> usize {
        self.active_position
    }
    fn set_active_position(&mut self, index: usize) {
        self.active_position = index.min(SUBMIT_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_position {
            0 => Some(&mut self.full_name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.subject),
            3 => Some(&mut self.message),
            // Submit row has no FormField
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.full_name),
            1 => Some(&self.email),
            2 => Some(&self.subject),
            3 => Some(&self.message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn type_into(form: &mut ContactForm, id: FieldId, text: &str) {
        for c in text.chars() {
            form.field_mut(id).push_char(c);
        }
    }

    fn fill_all(form: &mut ContactForm) {
        type_into(form, FieldId::FullName, "Jane Doe");
        type_into(form, FieldId::Email, "jane@example.com");
        type_into(form, FieldId::Subject, "Hello");
        type_into(form, FieldId::Message, "Hi there");
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_starts_on_first_field() {
            let form = ContactForm::new();
            assert_eq!(form.active_position, 0);
            assert_eq!(form.focused_field(), Some(FieldId::FullName));
        }

        #[test]
        fn test_next_position_cycles_through_submit_row() {
            let mut form = ContactForm::new();
            for expected in [1, 2, 3, SUBMIT_ROW, 0] {
                form.next_position();
                assert_eq!(form.active_position, expected);
            }
        }

        #[test]
        fn test_prev_position_wraps_to_submit_row() {
            let mut form = ContactForm::new();
            form.prev_position();
            assert_eq!(form.active_position, SUBMIT_ROW);
            assert!(form.is_submit_row_active());
        }

        #[test]
        fn test_focused_field_is_none_on_submit_row() {
            let mut form = ContactForm::new();
            form.set_active_position(SUBMIT_ROW);
            assert_eq!(form.focused_field(), None);
        }

        #[test]
        fn test_set_active_position_clamps() {
            let mut form = ContactForm::new();
            form.set_active_position(100);
            assert_eq!(form.active_position, SUBMIT_ROW);
        }

        #[test]
        fn test_get_active_field_mut_on_submit_row_is_none() {
            let mut form = ContactForm::new();
            form.set_active_position(SUBMIT_ROW);
            assert!(form.get_active_field_mut().is_none());
        }

        #[test]
        fn test_get_field_order() {
            let form = ContactForm::new();
            assert_eq!(form.get_field(0).unwrap().id, FieldId::FullName);
            assert_eq!(form.get_field(1).unwrap().id, FieldId::Email);
            assert_eq!(form.get_field(2).unwrap().id, FieldId::Subject);
            assert_eq!(form.get_field(3).unwrap().id, FieldId::Message);
            assert!(form.get_field(SUBMIT_ROW).is_none());
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_field_edits_are_independent() {
            let mut form = ContactForm::new();
            type_into(&mut form, FieldId::FullName, "Jane");
            type_into(&mut form, FieldId::Subject, "Hi");
            type_into(&mut form, FieldId::FullName, " Doe");
            type_into(&mut form, FieldId::Email, "j@e.com");

            assert_eq!(form.full_name.value, "Jane Doe");
            assert_eq!(form.email.value, "j@e.com");
            assert_eq!(form.subject.value, "Hi");
            assert_eq!(form.message.value, "");
        }

        #[test]
        fn test_last_write_wins_per_field() {
            let mut form = ContactForm::new();
            type_into(&mut form, FieldId::Subject, "first");
            form.field_mut(FieldId::Subject).clear();
            type_into(&mut form, FieldId::Subject, "second");
            assert_eq!(form.subject.value, "second");
        }

        #[test]
        fn test_reset_clears_all_fields_and_position() {
            let mut form = ContactForm::new();
            fill_all(&mut form);
            form.set_active_position(SUBMIT_ROW);
            form.reset();
            assert!(form.full_name.is_empty());
            assert!(form.email.is_empty());
            assert!(form.subject.is_empty());
            assert!(form.message.is_empty());
            assert_eq!(form.active_position, 0);
        }
    }

    mod validity {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_form_is_invalid() {
            assert!(!ContactForm::new().is_valid());
        }

        #[test]
        fn test_all_fields_filled_is_valid() {
            let mut form = ContactForm::new();
            fill_all(&mut form);
            assert!(form.is_valid());
        }

        #[test]
        fn test_any_single_empty_field_is_invalid() {
            for id in FieldId::ALL {
                let mut form = ContactForm::new();
                fill_all(&mut form);
                form.field_mut(id).clear();
                assert!(!form.is_valid(), "expected invalid with {} empty", id.name());
            }
        }

        #[test]
        fn test_whitespace_only_counts_as_present() {
            let mut form = ContactForm::new();
            fill_all(&mut form);
            form.field_mut(FieldId::Subject).clear();
            form.field_mut(FieldId::Subject).push_char(' ');
            assert!(form.is_valid());
        }
    }
}
