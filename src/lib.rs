//! Folio Contact - contact-form backend for a personal portfolio site.
//!
//! A visitor's submission is validated, rendered into an HTML and plain-text
//! email and forwarded to the Resend transactional email API.
//!
//! # Architecture
//!
//! - **form**: client-side form state, field validation and submission
//! - **models**: the submission and outbound email payloads
//! - **render**: askama email templates and their themes
//! - **client**: HTTP client for the Resend API and the `EmailProvider` seam
//! - **services**: composes and dispatches notification emails
//! - **server**: axum router and the submission handlers
//! - **config**, **error**, **metrics**, **domain**: supporting types

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod metrics;
pub mod models;
pub mod render;
pub mod server;
pub mod services;

pub use client::{EmailProvider, ResendClient, ResendEmailProvider};
pub use config::Config;
pub use error::{ConfigError, DispatchError, EmailApiError};
pub use form::{validate_form, ContactForm, FormErrors, FormField, FormSubmitter, SubmitStatus};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{ContactSubmission, OutboundEmail};
pub use render::{render_email, RenderedEmail, Theme};
pub use server::AppState;
pub use services::{Mailbox, SubmissionService};
