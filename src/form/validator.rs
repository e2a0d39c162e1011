//! Field rules for the contact form.

use crate::models::ContactSubmission;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

static EMAIL_SHAPE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Failed to compile email shape regex"));

/// Minimum message length, counted in characters after trimming.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// A field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl FormField {
    /// Wire name of the field, as used in the JSON body.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name to error message, for every field that failed its rule.
pub type FormErrors = BTreeMap<FormField, &'static str>;

/// Whether `value` has the loose `x@y.z` shape.
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE_REGEX.is_match(value)
}

/// Check every field of a submission.
///
/// An empty map means the form may be submitted. `phone` is never checked.
pub fn validate_form(submission: &ContactSubmission) -> FormErrors {
    let mut errors = FormErrors::new();

    if submission.name.trim().is_empty() {
        errors.insert(FormField::Name, "Name is required");
    }

    if submission.email.trim().is_empty() {
        errors.insert(FormField::Email, "Email is required");
    } else if !is_email_shaped(&submission.email) {
        errors.insert(FormField::Email, "Email is invalid");
    }

    if submission.subject.trim().is_empty() {
        errors.insert(FormField::Subject, "Subject is required");
    }

    let message = submission.message.trim();
    if message.is_empty() {
        errors.insert(FormField::Message, "Message is required");
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.insert(
            FormField::Message,
            "Message must be at least 10 characters",
        );
    }

    errors
}
