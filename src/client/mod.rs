//! HTTP client for the contact form relay.
//!
//! This module provides a synchronous client for the Web3Forms-style relay
//! endpoint. [`RelaySubmitter`] wraps it as a [`crate::form::SubmissionStrategy`]
//! by running calls under `tokio::task::spawn_blocking`.

mod async_wrapper;
pub use async_wrapper::RelaySubmitter;

use crate::config::Config;
use crate::error::{RelayError, RelayResult};
use crate::form::ContactSubmission;
use crate::metrics::{HttpTimer, Metrics};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Message used when the relay refuses without saying why.
const GENERIC_REJECTION: &str = "Form submission failed";

/// Body POSTed to the relay.
#[derive(Debug, Serialize)]
struct RelayRequest<'a> {
    access_key: &'a str,
    #[serde(flatten)]
    submission: &'a ContactSubmission,
}

/// JSON body returned by the relay.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RelayResponse {
    /// Whether the relay accepted the submission
    #[serde(default)]
    pub success: bool,

    /// Optional human-readable explanation
    #[serde(default)]
    pub message: Option<String>,
}

/// HTTP client for the form relay.
///
/// Uses `ureq` for synchronous requests; call it from async code through
/// [`RelaySubmitter`].
#[derive(Clone)]
pub struct RelayClient {
    /// Relay endpoint URL
    endpoint: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl RelayClient {
    /// Create a new RelayClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            endpoint: config.relay_endpoint.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a RelayClient with a custom endpoint (useful for testing).
    #[doc(hidden)]
    pub fn with_endpoint(endpoint: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            endpoint,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Use a shared metrics collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST a validated submission to the relay.
    ///
    /// Succeeds only when the relay answers 2xx *and* reports `success: true`.
    /// A refusal surfaces the relay's own message as `RelayError::ApiError`.
    pub fn submit(
        &self,
        access_key: &str,
        submission: &ContactSubmission,
    ) -> RelayResult<RelayResponse> {
        let timer = HttpTimer::new(self.metrics.clone());
        let request = RelayRequest {
            access_key,
            submission,
        };

        tracing::debug!("POST {}", self.endpoint);

        let result = self
            .agent
            .post(&self.endpoint)
            .set("Accept", "application/json")
            .send_json(&request)
            .map_err(Self::map_error)
            .and_then(|response| {
                let status = response.status();
                let body = response
                    .into_string()
                    .map_err(|e| RelayError::HttpError(e.to_string()))?;
                let parsed: RelayResponse = serde_json::from_str(&body)?;

                if parsed.success {
                    Ok(parsed)
                } else {
                    Err(RelayError::ApiError {
                        status,
                        message: parsed
                            .message
                            .unwrap_or_else(|| GENERIC_REJECTION.to_string()),
                    })
                }
            });

        match &result {
            Ok(_) => {
                tracing::debug!("POST {} - Success", self.endpoint);
                timer.complete();
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", self.endpoint, e);
                timer.complete_with_error();
            }
        }

        result
    }

    /// Map a ureq error to a RelayError.
    fn map_error(error: ureq::Error) -> RelayError {
        match error {
            ureq::Error::Status(code, response) => {
                let body = response.into_string().unwrap_or_default();
                let message = serde_json::from_str::<RelayResponse>(&body)
                    .ok()
                    .and_then(|parsed| parsed.message)
                    .unwrap_or_else(|| GENERIC_REJECTION.to_string());

                RelayError::ApiError {
                    status: code,
                    message,
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    RelayError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    RelayError::Timeout
                } else {
                    RelayError::HttpError(transport.to_string())
                }
            }
        }
    }
}
