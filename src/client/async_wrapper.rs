//! Relay submission strategy.
//!
//! Wraps the synchronous [`RelayClient`] so the contact form can await it.
//! Calls run on tokio's blocking pool to keep the event loop responsive.

use crate::client::RelayClient;
use crate::config::{Config, ACCESS_KEY_PLACEHOLDER};
use crate::error::{SubmitError, SubmitResult};
use crate::form::{ContactSubmission, SubmissionStrategy, SubmitOutcome, SubmitReceipt};
use async_trait::async_trait;
use std::sync::Arc;

/// Submission strategy that relays the form to a remote endpoint.
#[derive(Clone)]
pub struct RelaySubmitter {
    client: Arc<RelayClient>,
    access_key: Option<String>,
}

impl RelaySubmitter {
    pub fn new(client: RelayClient, access_key: Option<String>) -> Self {
        Self {
            client: Arc::new(client),
            access_key,
        }
    }

    /// Build a client and strategy from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(RelayClient::new(config), config.relay_access_key.clone())
    }

    pub fn client(&self) -> &RelayClient {
        &self.client
    }

    fn access_key(&self) -> SubmitResult<&str> {
        match self.access_key.as_deref() {
            None => Err(SubmitError::NotConfigured(
                "relay access key is missing".to_string(),
            )),
            Some(ACCESS_KEY_PLACEHOLDER) => Err(SubmitError::NotConfigured(
                "relay access key is still the template placeholder".to_string(),
            )),
            Some(key) => Ok(key),
        }
    }
}

#[async_trait]
impl SubmissionStrategy for RelaySubmitter {
    fn name(&self) -> &'static str {
        "relay"
    }

    fn ensure_configured(&self) -> SubmitResult<()> {
        self.access_key().map(|_| ())
    }

    async fn submit(&self, submission: &ContactSubmission) -> SubmitOutcome {
        let access_key = self.access_key()?.to_string();
        let client = self.client.clone();
        let submission = submission.clone();

        let response = tokio::task::spawn_blocking(move || client.submit(&access_key, &submission))
            .await
            .map_err(|e| SubmitError::Transport(format!("Task join error: {}", e)))??;

        Ok(SubmitReceipt {
            relay_message: response.message,
        })
    }
}
