//! HTTP client for the Resend transactional email API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication and maps
//! provider failures onto [`EmailApiError`].

mod async_wrapper;
pub use async_wrapper::{EmailProvider, ResendEmailProvider};

use crate::config::Config;
use crate::error::{EmailApiError, EmailApiResult};
use crate::metrics::Metrics;
use crate::models::OutboundEmail;
use std::error::Error as _;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// HTTP client for the Resend API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ResendClient {
    /// Base URL for the Resend API
    base_url: String,

    /// API key sent as a bearer token
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ResendClient {
    /// Create a new ResendClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.resend_api_url.clone(),
            api_key: config.resend_api_key.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a ResendClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Report provider calls into an existing collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a POST request with authentication and JSON body.
    fn post(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, EmailApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
                self.metrics.record_http_request(duration);
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                self.metrics.record_http_error();
                self.metrics.record_http_request(duration);
            }
        }

        result
    }

    /// Map a ureq error to an EmailApiError.
    fn map_error(&self, error: ureq::Error) -> EmailApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 | 403 => EmailApiError::Unauthorized,
                    422 => EmailApiError::InvalidRequest(message),
                    429 => EmailApiError::RateLimitExceeded,
                    _ => EmailApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => match transport.kind() {
                ureq::ErrorKind::ConnectionFailed => {
                    EmailApiError::HttpError("Connection failed".to_string())
                }
                ureq::ErrorKind::Io if is_timeout(&transport) => EmailApiError::Timeout,
                _ => EmailApiError::HttpError(transport.to_string()),
            },
        }
    }

    /// Send one email.
    ///
    /// Returns the provider's JSON response (for Resend, `{"id": "..."}`).
    /// Nothing is retried; every call that reaches the provider may deliver a
    /// message.
    pub fn send_email(&self, email: &OutboundEmail) -> EmailApiResult<serde_json::Value> {
        let body = serde_json::to_value(email).map_err(EmailApiError::JsonError)?;
        let response = self.post("/emails", &body)?;
        let body = response
            .into_string()
            .map_err(|e| EmailApiError::HttpError(e.to_string()))?;

        serde_json::from_str(&body).map_err(EmailApiError::JsonError)
    }
}

/// Whether a transport failure was caused by the agent's read/write timeout.
fn is_timeout(transport: &ureq::Transport) -> bool {
    transport
        .source()
        .and_then(|source| source.downcast_ref::<io::Error>())
        .is_some_and(|e| matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock))
}
