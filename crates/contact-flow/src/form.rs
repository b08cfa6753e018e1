//! Form State
//!
//! Controlled contents of the contact form.

use thiserror::Error;
use validator::ValidateEmail;

/// One of the three form controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    /// Value of the control's `name` attribute
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(FormField::Name),
            "email" => Some(FormField::Email),
            "message" => Some(FormField::Message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{} is required", .0.name())]
    Missing(FormField),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

/// Visitor input, owned by application state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormData {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    /// Set a field verbatim. No validation happens here.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }

    /// Clear all fields to empty strings
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// Presence and email-shape check, mirroring the browser's native constraints.
    /// Checks exactly the strings that get sent; nothing is trimmed.
    pub fn validate(&self) -> Result<(), FormError> {
        for field in [FormField::Name, FormField::Email, FormField::Message] {
            if self.get(field).is_empty() {
                return Err(FormError::Missing(field));
            }
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

/// HTML `type=email` shape: `local@domain`
pub fn is_valid_email(address: &str) -> bool {
    address.validate_email()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_and_reset() {
        let mut form = FormData::default();
        form.update_field(FormField::Name, "Ann");
        form.update_field(FormField::Email, "ann@x.com");
        form.update_field(FormField::Message, "Hi");
        assert_eq!(form, FormData::new("Ann", "ann@x.com", "Hi"));

        form.reset();
        assert!(form.is_empty());
        assert_eq!(form.name, "");
    }

    #[test]
    fn test_update_does_not_validate() {
        let mut form = FormData::default();
        form.update_field(FormField::Email, "not an email");
        assert_eq!(form.get(FormField::Email), "not an email");
    }

    #[test]
    fn test_field_names() {
        for field in [FormField::Name, FormField::Email, FormField::Message] {
            assert_eq!(FormField::from_name(field.name()), Some(field));
        }
        assert_eq!(FormField::from_name("phone"), None);
    }

    #[test]
    fn test_validate_missing() {
        let form = FormData::new("Ann", "ann@x.com", "");
        assert_eq!(form.validate(), Err(FormError::Missing(FormField::Message)));

        // `required` only asks for a non-empty value
        let form = FormData::new("   ", "ann@x.com", "\n");
        assert_eq!(form.validate(), Ok(()));

        let form = FormData::new("", "", "");
        assert_eq!(form.validate(), Err(FormError::Missing(FormField::Name)));
    }

    #[test]
    fn test_validate_email_shape() {
        assert!(is_valid_email("ann@x.com"));
        assert!(is_valid_email("first.last+tag@mail.example-host.org"));
        assert!(is_valid_email("a@b"));

        assert!(!is_valid_email("ann"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("ann@"));
        assert!(!is_valid_email("ann@x..com"));
        assert!(!is_valid_email("ann@-x.com"));
        assert!(!is_valid_email("ann@x.com-"));
        assert!(!is_valid_email("ann@x@y.com"));
        assert!(!is_valid_email("an n@x.com"));

        let form = FormData::new("Ann", "ann@", "Hi");
        assert_eq!(form.validate(), Err(FormError::InvalidEmail("ann@".into())));

        // Validated as sent, surrounding spaces included
        let form = FormData::new("Ann", " ann@x.com ", "Hi");
        assert_eq!(form.validate(), Err(FormError::InvalidEmail(" ann@x.com ".into())));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FormError::Missing(FormField::Email).to_string(), "email is required");
    }
}
