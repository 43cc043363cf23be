//! Form domain layer
//!
//! Type-safe state for the contact form: field value objects,
//! keyboard position cycling, and the presence-validity predicate.

mod contact_form;
mod field;

pub use contact_form::{ContactForm, Form, SUBMIT_ROW};
pub use field::{FieldId, FormField};
