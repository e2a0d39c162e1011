//! Turns a contact submission into one outbound email.

use crate::client::EmailProvider;
use crate::config::Config;
use crate::error::DispatchError;
use crate::models::{ContactSubmission, OutboundEmail};
use crate::render::{render_email, Theme};
use chrono::Datelike;
use std::sync::Arc;

/// Fixed sender and recipients for every notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailbox {
    pub from: String,
    pub to: Vec<String>,
    pub site_name: String,
}

impl From<&Config> for Mailbox {
    fn from(config: &Config) -> Self {
        Self {
            from: config.contact_from.clone(),
            to: config.contact_to.clone(),
            site_name: config.site_name.clone(),
        }
    }
}

/// Renders submissions and hands them to the email provider.
#[derive(Clone)]
pub struct SubmissionService {
    provider: Arc<dyn EmailProvider>,
    mailbox: Mailbox,
}

impl SubmissionService {
    pub fn new(provider: Arc<dyn EmailProvider>, mailbox: Mailbox) -> Self {
        Self { provider, mailbox }
    }

    /// Build the email for `submission` without sending it.
    ///
    /// Replies go to the visitor's address.
    pub fn compose(
        &self,
        submission: &ContactSubmission,
        theme: &Theme,
    ) -> Result<OutboundEmail, DispatchError> {
        let year = chrono::Utc::now().year();
        let rendered = render_email(submission, theme, &self.mailbox.site_name, year)?;

        Ok(OutboundEmail {
            from: self.mailbox.from.clone(),
            to: self.mailbox.to.clone(),
            reply_to: submission.email.clone(),
            subject: rendered.subject,
            html: rendered.html,
            text: rendered.text,
        })
    }

    /// Compose and send one email, returning the provider's response payload.
    pub async fn dispatch(
        &self,
        submission: &ContactSubmission,
        theme: &Theme,
    ) -> Result<serde_json::Value, DispatchError> {
        let email = self.compose(submission, theme)?;
        let data = self.provider.send_email(&email).await?;
        Ok(data)
    }
}
