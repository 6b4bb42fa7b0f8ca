//! Domain validation errors.

use super::field::Field;
use std::fmt;

/// Minimum accepted message length, in characters, after trimming.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Minimum accepted phone length, in characters, after trimming.
pub const MIN_PHONE_CHARS: usize = 10;

/// A single user-correctable problem with one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The field was absent or blank.
    Required(Field),

    /// The provided email address is malformed.
    InvalidEmail(String),

    /// The provided phone number is malformed or too short.
    InvalidPhone(String),

    /// The message is shorter than [`MIN_MESSAGE_CHARS`].
    MessageTooShort(usize),
}

impl ValidationError {
    /// The field this error belongs to.
    pub fn field(&self) -> Field {
        match self {
            Self::Required(field) => *field,
            Self::InvalidEmail(_) => Field::Email,
            Self::InvalidPhone(_) => Field::Phone,
            Self::MessageTooShort(_) => Field::Message,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required(field) => write!(f, "{} is required", field.label()),
            Self::InvalidEmail(_) => write!(f, "Please enter a valid email address"),
            Self::InvalidPhone(_) => write!(
                f,
                "Please enter a valid phone number (minimum {} digits)",
                MIN_PHONE_CHARS
            ),
            Self::MessageTooShort(_) => write!(
                f,
                "Message must be at least {} characters long",
                MIN_MESSAGE_CHARS
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
