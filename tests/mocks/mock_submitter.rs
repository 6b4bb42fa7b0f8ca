use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use vyse_site::error::{SubmitError, SubmitResult};
use vyse_site::form::{ContactSubmission, SubmissionStrategy, SubmitOutcome, SubmitReceipt};

/// Mock submission strategy for testing.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockSubmitter {
    outcome: Arc<Mutex<SubmitOutcome>>,
    configured: Arc<Mutex<bool>>,
    received: Arc<Mutex<Vec<ContactSubmission>>>,
}

#[allow(dead_code)]
impl MockSubmitter {
    pub fn succeeding() -> Self {
        Self::with_outcome(Ok(SubmitReceipt::default()))
    }

    pub fn failing(err: SubmitError) -> Self {
        Self::with_outcome(Err(err))
    }

    pub fn with_outcome(outcome: SubmitOutcome) -> Self {
        Self {
            outcome: Arc::new(Mutex::new(outcome)),
            configured: Arc::new(Mutex::new(true)),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn unconfigured() -> Self {
        let mock = Self::succeeding();
        *mock.configured.lock().unwrap() = false;
        mock
    }

    pub fn set_outcome(&self, outcome: SubmitOutcome) {
        *self.outcome.lock().unwrap() = outcome;
    }

    pub fn received(&self) -> Vec<ContactSubmission> {
        self.received.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

#[async_trait]
impl SubmissionStrategy for MockSubmitter {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn ensure_configured(&self) -> SubmitResult<()> {
        if *self.configured.lock().unwrap() {
            Ok(())
        } else {
            Err(SubmitError::NotConfigured("mock is unconfigured".to_string()))
        }
    }

    async fn submit(&self, submission: &ContactSubmission) -> SubmitOutcome {
        self.received.lock().unwrap().push(submission.clone());
        self.outcome.lock().unwrap().clone()
    }
}
