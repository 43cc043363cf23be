//! Form field value objects

/// Identifies one of the four contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    FullName,
    Email,
    Subject,
    Message,
}

impl FieldId {
    /// All fields in tab order
    pub const ALL: [FieldId; 4] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Subject,
        FieldId::Message,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FieldId::FullName => "full_name",
            FieldId::Email => "email",
            FieldId::Subject => "subject",
            FieldId::Message => "message",
        }
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub label: String,
    pub placeholder: String,
    pub value: String,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(id: FieldId, label: &str, placeholder: &str, is_multiline: bool) -> Self {
        Self {
            id,
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: String::new(),
            is_multiline,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Push a newline (multiline fields only)
    pub fn push_newline(&mut self) {
        if self.is_multiline {
            self.value.push('\n');
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_empty() {
        let field = FormField::text(FieldId::Email, "Email Address", "you@example.com", false);
        assert!(field.is_empty());
        assert_eq!(field.label, "Email Address");
        assert_eq!(field.placeholder, "you@example.com");
        assert!(!field.is_multiline);
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut field = FormField::text(FieldId::Subject, "Subject", "", false);
        field.push_char('h');
        field.push_char('i');
        assert_eq!(field.value, "hi");
        field.pop_char();
        assert_eq!(field.value, "h");
    }

    #[test]
    fn test_pop_char_on_empty_is_noop() {
        let mut field = FormField::text(FieldId::Subject, "Subject", "", false);
        field.pop_char();
        assert!(field.is_empty());
    }

    #[test]
    fn test_push_newline_only_on_multiline() {
        let mut single = FormField::text(FieldId::Subject, "Subject", "", false);
        single.push_newline();
        assert!(single.is_empty());

        let mut multi = FormField::text(FieldId::Message, "Message", "", true);
        multi.push_newline();
        assert_eq!(multi.value, "\n");
    }

    #[test]
    fn test_clear() {
        let mut field = FormField::text(FieldId::FullName, "Full Name", "", false);
        field.push_char('x');
        field.clear();
        assert!(field.is_empty());
    }

    #[test]
    fn test_field_id_names() {
        assert_eq!(FieldId::FullName.name(), "full_name");
        assert_eq!(FieldId::Email.name(), "email");
        assert_eq!(FieldId::Subject.name(), "subject");
        assert_eq!(FieldId::Message.name(), "message");
    }
}
