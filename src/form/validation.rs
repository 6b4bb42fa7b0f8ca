//! Contact form validation.
//!
//! Every field is checked, in the fixed order name, email, phone, message, so
//! that a single attempt reports all problems at once.

use super::fields::FormFields;
use crate::domain::errors::MIN_MESSAGE_CHARS;
use crate::domain::{EmailAddress, Field, PhoneNumber, ValidationError};
use serde::Serialize;

/// Ordered list of validation errors. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// True when no errors were found.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Human-readable messages, in field order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Single-line notice text: messages joined by ". " with a closing period.
    pub fn summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        format!("{}.", self.messages().join(". "))
    }

    /// Fields that need an error highlight, in field order.
    pub fn invalid_fields(&self) -> Vec<Field> {
        let mut fields: Vec<Field> = self.errors.iter().map(ValidationError::field).collect();
        fields.dedup();
        fields
    }

    /// Whether any error concerns `field`.
    pub fn has_error_for(&self, field: Field) -> bool {
        self.errors.iter().any(|err| err.field() == field)
    }

    fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }
}

impl IntoIterator for ValidationReport {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

/// A contact request whose every field passed validation.
///
/// This is the only input a submission strategy accepts, so nothing
/// unvalidated can reach the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub message: String,
}

impl ContactSubmission {
    /// Validate `fields`, returning either a typed submission or the full
    /// error report.
    pub fn parse(fields: &FormFields) -> Result<Self, ValidationReport> {
        let mut report = ValidationReport::default();

        let name = match fields.get(Field::Name) {
            Some(name) => Some(name.to_string()),
            None => {
                report.push(ValidationError::Required(Field::Name));
                None
            }
        };

        let email = match fields.get(Field::Email) {
            Some(raw) => EmailAddress::new(raw).map_err(|e| report.push(e)).ok(),
            None => {
                report.push(ValidationError::Required(Field::Email));
                None
            }
        };

        let phone = match fields.get(Field::Phone) {
            Some(raw) => PhoneNumber::new(raw).map_err(|e| report.push(e)).ok(),
            None => {
                report.push(ValidationError::Required(Field::Phone));
                None
            }
        };

        let message = match fields.get(Field::Message) {
            Some(text) if text.chars().count() < MIN_MESSAGE_CHARS => {
                report.push(ValidationError::MessageTooShort(text.chars().count()));
                None
            }
            Some(text) => Some(text.to_string()),
            None => {
                report.push(ValidationError::Required(Field::Message));
                None
            }
        };

        match (name, email, phone, message) {
            (Some(name), Some(email), Some(phone), Some(message)) if report.is_valid() => {
                Ok(Self {
                    name,
                    email,
                    phone,
                    message,
                })
            }
            _ => Err(report),
        }
    }
}

/// Validate contact form fields without consuming or changing them.
pub fn validate(fields: &FormFields) -> ValidationReport {
    match ContactSubmission::parse(fields) {
        Ok(_) => ValidationReport::default(),
        Err(report) => report,
    }
}
