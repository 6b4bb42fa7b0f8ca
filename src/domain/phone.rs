//! PhoneNumber value object.

use super::errors::{ValidationError, MIN_PHONE_CHARS};
use serde::{Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for phone numbers.
///
/// Accepts digits, whitespace, `-`, `+`, `(` and `)`, at least
/// [`MIN_PHONE_CHARS`] characters in total. Formatting characters count
/// towards the minimum.
///
/// # Example
///
/// ```
/// use vyse_site::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("555-123-4567").unwrap();
/// assert_eq!(phone.digits_only(), "5551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    fn is_valid(phone: &str) -> bool {
        if phone.chars().count() < MIN_PHONE_CHARS {
            return false;
        }

        phone.chars().all(|c| {
            c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '+' | '(' | ')')
        })
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
