//! Contact form state and its reducer.
//!
//! The form is a plain immutable value. Edits go through [`reduce`] (or
//! [`ContactForm::with_field`]) and produce a new value; submission produces
//! the reset state plus one [`Acknowledgment`]. Nothing here performs I/O,
//! so the UI layer only has to store the returned value.

use serde::{Deserialize, Serialize};

use crate::types::Acknowledgment;

/// One of the three contact form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    /// Sender name
    Name,
    /// Sender email address
    Email,
    /// Message body
    Message,
}

impl FormField {
    /// Fields in the order the form lays them out.
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    /// Value of the input's `name` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }

    /// Placeholder text shown in the empty input.
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Your Name",
            FormField::Email => "Your Email",
            FormField::Message => "Your Message",
        }
    }
}

/// Local state of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    /// Sender name
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Message body
    pub message: String,
}

/// Result of submitting the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    /// State to store after submission (always empty)
    pub next: ContactForm,
    /// Confirmation to show the visitor, exactly once
    pub acknowledgment: Acknowledgment,
}

impl ContactForm {
    /// Current value of one field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    /// Replace a single field, leaving the other two untouched.
    pub fn with_field(mut self, field: FormField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
        self
    }

    /// True when all three fields are empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// Submit the form. The message goes nowhere; the caller shows the
    /// acknowledgment and stores [`Submission::next`].
    pub fn submit(&self) -> Submission {
        tracing::debug!(
            name_len = self.name.len(),
            message_len = self.message.len(),
            "contact form submitted (demo, not delivered)"
        );
        Submission {
            next: ContactForm::default(),
            acknowledgment: Acknowledgment,
        }
    }
}

/// Reducer form of [`ContactForm::with_field`]: `(state, field, value) -> state`.
pub fn reduce(state: ContactForm, field: FormField, value: impl Into<String>) -> ContactForm {
    state.with_field(field, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Alice".into(),
            email: "a@b.com".into(),
            message: "Hi".into(),
        }
    }

    #[test]
    fn editing_name_leaves_other_fields() {
        let before = ContactForm {
            name: String::new(),
            email: "a@b.com".into(),
            message: "Hi".into(),
        };

        let after = reduce(before.clone(), FormField::Name, "Alice");

        assert_eq!(after.name, "Alice");
        assert_eq!(after.email, before.email);
        assert_eq!(after.message, before.message);
    }

    #[test]
    fn each_field_is_addressable() {
        let form = FormField::ALL
            .iter()
            .fold(ContactForm::default(), |state, field| {
                state.with_field(*field, field.as_str().to_uppercase())
            });

        assert_eq!(form.get(FormField::Name), "NAME");
        assert_eq!(form.get(FormField::Email), "EMAIL");
        assert_eq!(form.get(FormField::Message), "MESSAGE");
    }

    #[test]
    fn repeated_edits_keep_last_value() {
        let form = ContactForm::default()
            .with_field(FormField::Message, "H")
            .with_field(FormField::Message, "Hi")
            .with_field(FormField::Message, "Hi!");
        assert_eq!(form.message, "Hi!");
        assert!(form.name.is_empty());
    }

    #[test]
    fn submit_resets_and_acknowledges_once() {
        let form = filled();
        let submission = form.submit();

        assert_eq!(
            submission.next,
            ContactForm {
                name: String::new(),
                email: String::new(),
                message: String::new(),
            }
        );
        assert!(submission.next.is_empty());
        assert_eq!(submission.acknowledgment, Acknowledgment);
    }

    #[test]
    fn submitting_an_empty_form_still_acknowledges() {
        let submission = ContactForm::default().submit();
        assert!(submission.next.is_empty());
        assert_eq!(
            submission.acknowledgment.message(),
            "Message sent! (This is a demo form)"
        );
    }

    #[test]
    fn field_names_match_input_attributes() {
        let names: Vec<_> = FormField::ALL.iter().map(FormField::as_str).collect();
        assert_eq!(names, vec!["name", "email", "message"]);
        assert_eq!(FormField::Email.placeholder(), "Your Email");
    }
}
