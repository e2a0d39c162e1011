//! HTTP client that posts a contact form to the submission endpoint.
//!
//! This is the browser side of the pipeline: it sends the JSON body the handler
//! expects and turns whatever comes back into a [`SubmitStatus`].

use crate::models::ContactSubmission;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Outcome of the last submit attempt, as shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    #[serde(default)]
    success: bool,
}

/// Posts submissions to a handler endpoint such as `https://site/api/send-email`.
#[derive(Clone)]
pub struct FormSubmitter {
    endpoint: String,
    agent: Arc<ureq::Agent>,
}

impl FormSubmitter {
    /// Create a submitter for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            endpoint: endpoint.into(),
            agent: Arc::new(agent),
        }
    }

    /// Send one submission.
    ///
    /// Only a 2xx answer whose body carries `"success": true` counts as
    /// [`SubmitStatus::Success`]; transport failures, error statuses and
    /// unreadable bodies all become [`SubmitStatus::Error`].
    pub fn submit(&self, submission: &ContactSubmission) -> SubmitStatus {
        let response = match self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .send_json(submission)
        {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => {
                tracing::warn!("POST {} - rejected with status {}", self.endpoint, code);
                return SubmitStatus::Error;
            }
            Err(e) => {
                tracing::error!("Error submitting form: {}", e);
                return SubmitStatus::Error;
            }
        };

        match response.into_json::<SubmitResponse>() {
            Ok(body) if body.success => SubmitStatus::Success,
            Ok(_) => SubmitStatus::Error,
            Err(e) => {
                tracing::error!("Unreadable response from {}: {}", self.endpoint, e);
                SubmitStatus::Error
            }
        }
    }
}
