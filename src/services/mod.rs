//! Application service layer.
//!
//! Services hold the business logic between the HTTP handlers and the email
//! provider client.

mod submission_service;

pub use submission_service::{Mailbox, SubmissionService};
