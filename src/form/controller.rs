//! Contact form controller.
//!
//! Owns the current field values, the error highlights and the submission
//! lifecycle:
//!
//! ```text
//! Idle -> Validating -> Invalid -> Idle
//!                    -> Submitting -> Success | Failure -> Idle
//! ```
//!
//! Starting and finishing a submission are separate calls so the event loop
//! never holds the form across the network await.

use super::fields::FormFields;
use super::submission::{SubmissionStrategy, SubmitOutcome};
use super::validation::{ContactSubmission, ValidationReport};
use crate::domain::Field;
use crate::error::{FormError, SubmitError};
use crate::metrics::Metrics;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// How long a notice stays on the page before it is dismissed.
pub const NOTICE_TTL: Duration = Duration::from_secs(8);

/// Label shown on the submit button while a request is in flight.
pub const SENDING_LABEL: &str = "Sending...";

const DEFAULT_BUTTON_LABEL: &str = "Send Message";

const SUCCESS_TEXT: &str =
    "Thank you! Your message has been sent successfully. We'll get back to you within 24-48 hours.";

/// Where the form is in its submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Validating,
    Submitting,
}

/// Visual kind of a form notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A status message shown below the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormNotice {
    pub kind: NoticeKind,
    pub text: String,
}

impl FormNotice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    /// Time after which the notice is removed.
    pub fn ttl(&self) -> Duration {
        NOTICE_TTL
    }
}

/// Declarative state of the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
    pub loading: bool,
}

/// A validated submission ready to be sent.
pub struct PendingSubmission {
    strategy: Arc<dyn SubmissionStrategy>,
    submission: ContactSubmission,
}

impl std::fmt::Debug for PendingSubmission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingSubmission")
            .field("strategy", &self.strategy.name())
            .field("submission", &self.submission)
            .finish()
    }
}

impl PendingSubmission {
    pub fn submission(&self) -> &ContactSubmission {
        &self.submission
    }

    /// Send the submission. Resolves to exactly one outcome.
    pub async fn run(self) -> SubmitOutcome {
        debug!("Submitting contact form via {}", self.strategy.name());
        self.strategy.submit(&self.submission).await
    }
}

/// The contact form as seen by the page.
pub struct ContactForm {
    strategy: Arc<dyn SubmissionStrategy>,
    support_email: String,
    button_label: String,
    phase: SubmissionPhase,
    fields: FormFields,
    highlighted: BTreeSet<Field>,
    metrics: Metrics,
}

impl ContactForm {
    /// Create a form that submits through `strategy`.
    pub fn new(strategy: Arc<dyn SubmissionStrategy>, support_email: impl Into<String>) -> Self {
        Self {
            strategy,
            support_email: support_email.into(),
            button_label: DEFAULT_BUTTON_LABEL.to_string(),
            phase: SubmissionPhase::Idle,
            fields: FormFields::new(),
            highlighted: BTreeSet::new(),
            metrics: Metrics::new(),
        }
    }

    /// Use a shared metrics collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Override the idle label of the submit button.
    pub fn with_button_label(mut self, label: impl Into<String>) -> Self {
        self.button_label = label.into();
        self
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Fields currently highlighted as invalid.
    pub fn highlighted(&self) -> impl Iterator<Item = Field> + '_ {
        self.highlighted.iter().copied()
    }

    /// Record user input. Returns true if this cleared an error highlight.
    pub fn input(&mut self, field: Field, value: impl AsRef<str>) -> bool {
        self.fields.set(field, value);
        self.highlighted.remove(&field)
    }

    /// Current submit button state.
    pub fn button(&self) -> SubmitButton {
        match self.phase {
            SubmissionPhase::Submitting => SubmitButton {
                label: SENDING_LABEL.to_string(),
                disabled: true,
                loading: true,
            },
            _ => SubmitButton {
                label: self.button_label.clone(),
                disabled: false,
                loading: false,
            },
        }
    }

    /// Try to start a submission of the current field values.
    ///
    /// # Errors
    ///
    /// - `FormError::Busy` while a previous submission is in flight
    /// - `FormError::NotConfigured` when the strategy cannot be used
    /// - `FormError::Invalid` with the full report when validation fails
    pub fn begin(&mut self) -> Result<PendingSubmission, FormError> {
        if self.phase == SubmissionPhase::Submitting {
            debug!("Ignoring submit while a submission is in flight");
            return Err(FormError::Busy);
        }

        if let Err(err) = self.strategy.ensure_configured() {
            warn!("Contact form submission blocked: {}", err);
            return Err(FormError::NotConfigured(err.to_string()));
        }

        self.phase = SubmissionPhase::Validating;
        match ContactSubmission::parse(&self.fields) {
            Ok(submission) => {
                self.highlighted.clear();
                self.phase = SubmissionPhase::Submitting;
                Ok(PendingSubmission {
                    strategy: self.strategy.clone(),
                    submission,
                })
            }
            Err(report) => {
                self.highlighted = report.invalid_fields().into_iter().collect();
                self.metrics.record_validation_failure();
                self.phase = SubmissionPhase::Idle;
                debug!("Contact form invalid: {}", report.summary());
                Err(FormError::Invalid(report))
            }
        }
    }

    /// Notice for a refused start, `None` when the attempt is silently ignored.
    pub fn notice_for(&self, err: &FormError) -> Option<FormNotice> {
        match err {
            FormError::Busy => None,
            FormError::NotConfigured(_) => Some(FormNotice::error(format!(
                "Form is not properly configured. Please contact us directly at {}",
                self.support_email
            ))),
            FormError::Invalid(report) => Some(Self::invalid_notice(report)),
        }
    }

    fn invalid_notice(report: &ValidationReport) -> FormNotice {
        FormNotice::error(report.summary())
    }

    /// Complete the in-flight submission and return to Idle.
    ///
    /// Returns `None`, leaving the form untouched, when nothing is in flight.
    pub fn finish(&mut self, outcome: SubmitOutcome) -> Option<FormNotice> {
        if self.phase != SubmissionPhase::Submitting {
            warn!("Ignoring submission outcome with no submission in flight");
            return None;
        }
        self.phase = SubmissionPhase::Idle;

        let notice = match outcome {
            Ok(receipt) => {
                self.metrics.record_submission_succeeded();
                self.fields.clear();
                info!(
                    "Contact form sent ({})",
                    receipt.relay_message.as_deref().unwrap_or("no relay message")
                );
                FormNotice::success(SUCCESS_TEXT)
            }
            Err(err) => {
                self.metrics.record_submission_failed();
                match &err {
                    SubmitError::Rejected(message) => {
                        error!("Form submission rejected by relay: {}", message)
                    }
                    other => error!("Form submission error: {}", other),
                }
                FormNotice::error(self.failure_text())
            }
        };
        Some(notice)
    }

    fn failure_text(&self) -> String {
        format!(
            "Something went wrong. Please try again or contact us directly at {}",
            self.support_email
        )
    }
}
