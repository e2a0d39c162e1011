//! Data models for contact submissions and outbound email.
//!
//! A submission lives for a single request: it is deserialized from the request
//! body, rendered into an [`OutboundEmail`] and dropped once the provider answers.

pub mod outbound;
pub mod submission;

pub use outbound::OutboundEmail;
pub use submission::ContactSubmission;
