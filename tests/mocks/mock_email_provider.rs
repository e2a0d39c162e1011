use async_trait::async_trait;
use folio_contact::error::{EmailApiError, EmailApiResult};
use folio_contact::models::OutboundEmail;
use folio_contact::EmailProvider;
use serde_json::json;
use std::sync::{Arc, Mutex};

/// In-memory email provider for testing.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockEmailProvider {
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
    failure: Arc<Mutex<Option<String>>>,
}

#[allow(dead_code)]
impl MockEmailProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following send fail with an API error carrying `message`.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailProvider for MockEmailProvider {
    async fn send_email(&self, email: &OutboundEmail) -> EmailApiResult<serde_json::Value> {
        let failure = self.failure.lock().unwrap().clone();
        if let Some(message) = failure {
            return Err(EmailApiError::ApiError {
                status: 500,
                message,
            });
        }

        let mut sent = self.sent.lock().unwrap();
        sent.push(email.clone());
        Ok(json!({ "id": format!("email-{}", sent.len()) }))
    }
}
