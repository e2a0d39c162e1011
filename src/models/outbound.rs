//! Outbound email payload sent to the provider.

use serde::Serialize;

/// A fully rendered email ready for the provider's send operation.
///
/// Field names follow the Resend `POST /emails` payload.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OutboundEmail {
    /// Sender mailbox, e.g. `Portfolio <onboarding@resend.dev>`
    pub from: String,

    /// Recipient addresses
    pub to: Vec<String>,

    /// Address replies go to (the visitor who submitted the form)
    pub reply_to: String,

    /// Subject line
    pub subject: String,

    /// HTML body
    pub html: String,

    /// Plain-text fallback body
    pub text: String,
}
