//! Async wrapper around the synchronous ResendClient.
//!
//! This module provides an async interface to the synchronous client by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::ResendClient;
use crate::error::{EmailApiError, EmailApiResult};
use crate::models::OutboundEmail;
use async_trait::async_trait;
use std::sync::Arc;

/// An email delivery provider.
///
/// The submission handlers hold an `Arc<dyn EmailProvider>` built once at
/// startup, so tests can swap in an in-memory implementation.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Send one email, returning the provider's response payload.
    async fn send_email(&self, email: &OutboundEmail) -> EmailApiResult<serde_json::Value>;
}

/// [`EmailProvider`] backed by the Resend HTTP API.
#[derive(Clone)]
pub struct ResendEmailProvider {
    client: Arc<ResendClient>,
}

impl ResendEmailProvider {
    pub fn new(client: ResendClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl EmailProvider for ResendEmailProvider {
    async fn send_email(&self, email: &OutboundEmail) -> EmailApiResult<serde_json::Value> {
        let client = self.client.clone();
        let email = email.clone();

        tokio::task::spawn_blocking(move || client.send_email(&email))
            .await
            .map_err(|e| EmailApiError::Other(e.to_string()))?
    }
}
