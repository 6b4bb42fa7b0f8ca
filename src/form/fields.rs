//! Captured contact form values.

use crate::domain::Field;
use serde::Deserialize;
use std::collections::HashMap;

/// Trimmed values of the four contact form fields.
///
/// Blank or whitespace-only input is stored as absent, so "required" checks
/// only ever need to look for `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawFormFields")]
pub struct FormFields {
    values: HashMap<Field, String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawFormFields {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl From<RawFormFields> for FormFields {
    fn from(raw: RawFormFields) -> Self {
        let mut fields = FormFields::new();
        let pairs = [
            (Field::Name, raw.name),
            (Field::Email, raw.email),
            (Field::Phone, raw.phone),
            (Field::Message, raw.message),
        ];
        for (field, value) in pairs {
            if let Some(value) = value {
                fields.set(field, value);
            }
        }
        fields
    }
}

impl FormFields {
    /// Create an empty set of fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(control name, value)` pairs, ignoring names that are not
    /// contact form fields.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut fields = Self::new();
        for (key, value) in pairs {
            if let Some(field) = Field::from_key(key.as_ref()) {
                fields.set(field, value.as_ref());
            }
        }
        fields
    }

    /// Builder-style setter.
    pub fn with(mut self, field: Field, value: impl AsRef<str>) -> Self {
        self.set(field, value);
        self
    }

    /// Store a trimmed value; blank input clears the field.
    pub fn set(&mut self, field: Field, value: impl AsRef<str>) {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            self.values.remove(&field);
        } else {
            self.values.insert(field, trimmed.to_string());
        }
    }

    /// Trimmed value of a field, `None` when absent or blank.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Clear every field (the page resets the form after a successful send).
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// True when no field holds a value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
