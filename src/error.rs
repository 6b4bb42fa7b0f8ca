//! Error types for the VYSE site core.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Per-field validation errors live in [`crate::domain::ValidationError`].

use crate::form::ValidationReport;
use thiserror::Error;

/// Errors that can occur when talking to the form relay endpoint.
#[derive(Error, Debug)]
pub enum RelayError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Relay returned an error status code
    #[error("Relay error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,
}

/// Terminal failure of a single submission attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The submission target is not set up (e.g. missing access key).
    #[error("Submission target is not configured: {0}")]
    NotConfigured(String),

    /// The relay answered but refused the submission.
    #[error("Submission rejected: {0}")]
    Rejected(String),

    /// The call itself could not complete.
    #[error("Transport failure: {0}")]
    Transport(String),
}

impl From<RelayError> for SubmitError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::ApiError { message, .. } => SubmitError::Rejected(message),
            other => SubmitError::Transport(other.to_string()),
        }
    }
}

/// Reasons the contact form refuses to start a submission.
#[derive(Error, Debug)]
pub enum FormError {
    /// A submission is already in flight
    #[error("A submission is already in progress")]
    Busy,

    /// Submission target is not configured
    #[error("Form is not configured: {0}")]
    NotConfigured(String),

    /// One or more fields failed validation
    #[error("Form has {} invalid field(s)", .0.len())]
    Invalid(ValidationReport),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RelayError
pub type RelayResult<T> = Result<T, RelayError>;

/// Convenience type alias for Results with SubmitError
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
