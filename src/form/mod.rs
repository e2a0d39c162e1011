//! Contact form state, validation and submission.
//!
//! [`ContactForm`] holds what the visitor typed together with the per-field
//! errors and the status of the last submit. It never sends a request for a
//! form that fails [`validate_form`].

mod submitter;
mod validator;

pub use submitter::{FormSubmitter, SubmitStatus};
pub use validator::{is_email_shaped, validate_form, FormErrors, FormField, MIN_MESSAGE_CHARS};

use crate::models::ContactSubmission;

/// Client-side state of the contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    values: ContactSubmission,
    phone: String,
    errors: FormErrors,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update one field. Any error shown for that field is cleared.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.values.name = value,
            FormField::Email => self.values.email = value,
            FormField::Phone => self.phone = value,
            FormField::Subject => self.values.subject = value,
            FormField::Message => self.values.message = value,
        }
        self.errors.remove(&field);
    }

    /// Current value of a field.
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.values.name,
            FormField::Email => &self.values.email,
            FormField::Phone => &self.phone,
            FormField::Subject => &self.values.subject,
            FormField::Message => &self.values.message,
        }
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Re-run every rule and store the result.
    ///
    /// Returns `true` when the form may be submitted. A failing form moves to
    /// [`SubmitStatus::Error`].
    pub fn validate(&mut self) -> bool {
        self.errors = validate_form(&self.to_submission());
        if !self.errors.is_empty() {
            self.status = SubmitStatus::Error;
        }
        self.errors.is_empty()
    }

    /// The request body for the current values. An empty phone is omitted.
    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            phone: Some(self.phone.clone()).filter(|p| !p.is_empty()),
            ..self.values.clone()
        }
    }

    /// Validate, then post through `submitter`.
    ///
    /// A successful submit clears the form.
    pub fn submit(&mut self, submitter: &FormSubmitter) -> SubmitStatus {
        if !self.validate() {
            return self.status;
        }

        self.status = SubmitStatus::Submitting;
        let status = submitter.submit(&self.to_submission());
        if status == SubmitStatus::Success {
            self.reset();
        }
        self.status = status;
        status
    }

    /// Clear all values and errors. The status is left untouched.
    pub fn reset(&mut self) {
        self.values = ContactSubmission::default();
        self.phone.clear();
        self.errors.clear();
    }
}
