//! Submission strategies.
//!
//! A strategy receives an already validated [`ContactSubmission`] and yields
//! exactly one terminal outcome. Two strategies exist: the HTTP relay in
//! [`crate::client::RelaySubmitter`] and the [`SimulatedSubmitter`] below for
//! pages without a configured relay.

use super::validation::ContactSubmission;
use crate::error::SubmitResult;
use async_trait::async_trait;
use std::time::Duration;

/// Default delay before the simulated strategy reports success.
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(1500);

/// Successful submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// Message returned by the relay, if any.
    pub relay_message: Option<String>,
}

/// Terminal result of one submission attempt.
pub type SubmitOutcome = SubmitResult<SubmitReceipt>;

/// How a validated contact request leaves the page.
#[async_trait]
pub trait SubmissionStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Check the strategy is usable before any transport is attempted.
    fn ensure_configured(&self) -> SubmitResult<()> {
        Ok(())
    }

    /// Deliver the submission.
    async fn submit(&self, submission: &ContactSubmission) -> SubmitOutcome;
}

/// Strategy that always succeeds after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATED_DELAY)
    }
}

#[async_trait]
impl SubmissionStrategy for SimulatedSubmitter {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn submit(&self, submission: &ContactSubmission) -> SubmitOutcome {
        tracing::debug!(
            "Simulating submission from {} ({} ms)",
            submission.email,
            self.delay.as_millis()
        );
        tokio::time::sleep(self.delay).await;
        Ok(SubmitReceipt::default())
    }
}
