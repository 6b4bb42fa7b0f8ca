//! Contact form: field capture, validation and submission.
//!
//! - **fields**: trimmed field values captured from the page
//! - **validation**: the rule set and its ordered error report
//! - **submission**: the strategy interface and the simulated strategy
//! - **controller**: the submission lifecycle owned by the page

pub mod controller;
pub mod fields;
pub mod submission;
pub mod validation;

pub use controller::{
    ContactForm, FormNotice, NoticeKind, PendingSubmission, SubmissionPhase, SubmitButton,
    NOTICE_TTL, SENDING_LABEL,
};
pub use fields::FormFields;
pub use submission::{SimulatedSubmitter, SubmissionStrategy, SubmitOutcome, SubmitReceipt};
pub use validation::{validate, ContactSubmission, ValidationReport};
