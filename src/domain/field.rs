//! Contact form field identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four user-facing fields of the contact form.
///
/// The declaration order is the order in which validation errors are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    /// All fields in validation order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    /// Form control name (and element id) of the field.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    /// Human-readable label used in "required" messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::Message => "Message",
        }
    }

    /// Look a field up by its form control name.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order() {
        let mut fields = vec![Field::Message, Field::Name, Field::Phone, Field::Email];
        fields.sort();
        assert_eq!(fields, Field::ALL.to_vec());
    }

    #[test]
    fn test_field_from_key() {
        assert_eq!(Field::from_key("phone"), Some(Field::Phone));
        assert_eq!(Field::from_key("access_key"), None);
    }

    #[test]
    fn test_field_serialization() {
        let json = serde_json::to_string(&Field::Email).unwrap();
        assert_eq!(json, "\"email\"");
    }
}
