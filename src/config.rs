//! Configuration management for the VYSE site core.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::str::FromStr;

/// Default Web3Forms relay endpoint.
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Placeholder shipped in the page template in place of a real access key.
pub const ACCESS_KEY_PLACEHOLDER: &str = "YOUR_ACCESS_KEY_HERE";

/// Which submission strategy the contact form uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionMode {
    /// POST to the relay endpoint
    Relay,
    /// Succeed locally after a fixed delay
    Simulated,
}

impl FromStr for SubmissionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relay" => Ok(SubmissionMode::Relay),
            "simulated" => Ok(SubmissionMode::Simulated),
            other => Err(format!("Must be 'relay' or 'simulated', got: {}", other)),
        }
    }
}

/// Configuration for the VYSE site core.
#[derive(Debug, Clone)]
pub struct Config {
    /// Submission strategy (default: relay)
    pub submission_mode: SubmissionMode,

    /// Relay endpoint URL
    pub relay_endpoint: String,

    /// Relay access key; `None` leaves the relay unconfigured
    pub relay_access_key: Option<String>,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Simulated submission delay in milliseconds (default: 1500)
    pub simulated_delay_ms: u64,

    /// Address shown to users when the form cannot be used
    pub support_email: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `SUBMISSION_MODE`: `relay` or `simulated` (default: relay)
    /// - `RELAY_ENDPOINT`: relay URL (default: Web3Forms)
    /// - `RELAY_ACCESS_KEY`: relay access key
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `SIMULATED_DELAY_MS`: simulated delay (default: 1500)
    /// - `SUPPORT_EMAIL`: support address (default: info@vyse.com)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Don't fail when the .env file is missing
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let submission_mode = match env::var("SUBMISSION_MODE") {
            Ok(val) => val
                .parse::<SubmissionMode>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "SUBMISSION_MODE".to_string(),
                    reason,
                })?,
            Err(_) => defaults.submission_mode,
        };

        let relay_endpoint =
            env::var("RELAY_ENDPOINT").unwrap_or_else(|_| DEFAULT_RELAY_ENDPOINT.to_string());

        if !relay_endpoint.starts_with("http://") && !relay_endpoint.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "RELAY_ENDPOINT".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let relay_access_key = env::var("RELAY_ACCESS_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        if relay_access_key.as_deref() == Some(ACCESS_KEY_PLACEHOLDER) {
            tracing::warn!(
                "SETUP REQUIRED: RELAY_ACCESS_KEY still holds the template placeholder"
            );
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", defaults.request_timeout)?;
        let simulated_delay_ms =
            Self::parse_env_u64("SIMULATED_DELAY_MS", defaults.simulated_delay_ms)?;

        let support_email = env::var("SUPPORT_EMAIL").unwrap_or(defaults.support_email);
        if crate::domain::EmailAddress::new(support_email.as_str()).is_err() {
            return Err(ConfigError::InvalidValue {
                var: "SUPPORT_EMAIL".to_string(),
                reason: format!("Not a valid email address: {}", support_email),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            submission_mode,
            relay_endpoint,
            relay_access_key,
            request_timeout,
            simulated_delay_ms,
            support_email,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            submission_mode: SubmissionMode::Relay,
            relay_endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            relay_access_key: None,
            request_timeout: 10,
            simulated_delay_ms: 1500,
            support_email: "info@vyse.com".to_string(),
            log_level: "error".to_string(),
        }
    }
}
