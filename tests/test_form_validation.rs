//! Contact form validation rules.

use vyse_site::domain::{Field, ValidationError};
use vyse_site::{validate, FormFields};

fn fields(name: &str, email: &str, phone: &str, message: &str) -> FormFields {
    FormFields::from_pairs([
        ("name", name),
        ("email", email),
        ("phone", phone),
        ("message", message),
    ])
}

#[test]
fn test_empty_form_has_four_errors_in_field_order() {
    let report = validate(&FormFields::new());

    assert_eq!(report.len(), 4);
    assert_eq!(
        report.messages(),
        vec![
            "Full Name is required",
            "Email Address is required",
            "Phone Number is required",
            "Message is required",
        ]
    );
    assert_eq!(report.invalid_fields(), Field::ALL.to_vec());
}

#[test]
fn test_malformed_values_report_distinct_errors() {
    let report = validate(&fields("A", "bad", "123", "short"));

    assert_eq!(
        report.errors(),
        &[
            ValidationError::InvalidEmail("bad".to_string()),
            ValidationError::InvalidPhone("123".to_string()),
            ValidationError::MessageTooShort(5),
        ]
    );
    assert!(!report.has_error_for(Field::Name));
}

#[test]
fn test_valid_form_has_no_errors() {
    let report = validate(&fields(
        "Jane",
        "jane@example.com",
        "555-123-4567",
        "This is a long enough message.",
    ));
    assert!(report.is_valid());
}

#[test]
fn test_whitespace_only_counts_as_missing() {
    let report = validate(&fields("   ", "\t", " ", "\n"));
    assert_eq!(report.len(), 4);
    assert!(report
        .errors()
        .iter()
        .all(|err| matches!(err, ValidationError::Required(_))));
}

#[test]
fn test_values_are_trimmed_before_checks() {
    let report = validate(&fields(
        " Jane ",
        "  jane@example.com  ",
        "  (555) 123-4567  ",
        "   exactly10!   ",
    ));
    assert!(report.is_valid(), "{:?}", report);
}

#[test]
fn test_phone_rules() {
    let base = |phone: &str| fields("Jane", "jane@example.com", phone, "Long enough message");

    assert!(validate(&base("+44 20 7946 0958")).is_valid());
    assert!(validate(&base("(555)1234567")).is_valid());
    assert!(!validate(&base("555-1234")).is_valid());
    assert!(!validate(&base("555.123.4567")).is_valid());
    assert!(!validate(&base("ext 5551234567")).is_valid());
}

#[test]
fn test_email_rules() {
    let base = |email: &str| fields("Jane", email, "555-123-4567", "Long enough message");

    assert!(validate(&base("a@b.co")).is_valid());
    assert!(!validate(&base("jane@example")).is_valid());
    assert!(!validate(&base("jane@@example.com")).is_valid());
    assert!(!validate(&base("jane @example.com")).is_valid());
}

#[test]
fn test_summary_text() {
    let report = validate(&fields("Jane", "", "123", "This is a long enough message."));
    assert_eq!(
        report.summary(),
        "Email Address is required. Please enter a valid phone number (minimum 10 digits)."
    );
}

#[test]
fn test_message_length_counts_characters_not_utf16_units() {
    // Each emoji is one char but two UTF-16 code units
    let five = "😀".repeat(5);
    assert_eq!(five.encode_utf16().count(), 10);
    let report = validate(&fields("Jane", "jane@example.com", "555-123-4567", &five));
    assert_eq!(report.errors(), &[ValidationError::MessageTooShort(5)]);

    let ten = "😀".repeat(10);
    let report = validate(&fields("Jane", "jane@example.com", "555-123-4567", &ten));
    assert!(report.is_valid());
}
