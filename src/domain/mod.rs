//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the contact form's fields.
//! These value objects validate at construction time and prevent malformed
//! input from reaching the submission layer.

pub mod email;
pub mod errors;
pub mod field;
pub mod phone;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use field::Field;
pub use phone::PhoneNumber;
