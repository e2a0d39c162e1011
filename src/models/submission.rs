//! Contact form submission model.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an empty phone string the same as an absent one.
fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// One contact-form payload submitted by a site visitor.
///
/// Missing string fields deserialize to the empty string so the handler can
/// answer with its own "missing fields" response instead of a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,

    pub email: String,

    /// Optional, no format enforced
    #[serde(
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,

    pub subject: String,

    pub message: String,
}

impl ContactSubmission {
    /// Whether `name`, `email`, `subject` and `message` are all present.
    ///
    /// This is a presence check only; whitespace-only values pass. Format
    /// rules live in the form validator.
    pub fn has_required_fields(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|value| !value.is_empty())
    }

    /// The phone number, if one was given.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            subject: "Hi".to_string(),
            message: "Let's build something great".to_string(),
        }
    }

    #[test]
    fn test_required_fields_present() {
        assert!(complete().has_required_fields());
    }

    #[test]
    fn test_each_required_field_is_checked() {
        let blanks: [fn(&mut ContactSubmission); 4] = [
            |s: &mut ContactSubmission| s.name.clear(),
            |s: &mut ContactSubmission| s.email.clear(),
            |s: &mut ContactSubmission| s.subject.clear(),
            |s: &mut ContactSubmission| s.message.clear(),
        ];

        for blank in blanks {
            let mut submission = complete();
            blank(&mut submission);
            assert!(!submission.has_required_fields(), "{:?}", submission);
        }
    }

    #[test]
    fn test_phone_is_not_required() {
        let submission = ContactSubmission {
            phone: None,
            ..complete()
        };
        assert!(submission.has_required_fields());
    }

    #[test]
    fn test_deserialize_missing_fields_default_to_empty() {
        let submission: ContactSubmission =
            serde_json::from_str(r#"{"name":"Ada","email":"ada@example.com"}"#).unwrap();
        assert_eq!(submission.subject, "");
        assert_eq!(submission.message, "");
        assert!(submission.phone.is_none());
        assert!(!submission.has_required_fields());
    }

    #[test]
    fn test_deserialize_empty_phone_is_absent() {
        let submission: ContactSubmission =
            serde_json::from_str(r#"{"name":"Ada","phone":""}"#).unwrap();
        assert!(submission.phone().is_none());

        let submission: ContactSubmission =
            serde_json::from_str(r#"{"name":"Ada","phone":"+234 808 380"}"#).unwrap();
        assert_eq!(submission.phone(), Some("+234 808 380"));
    }

    #[test]
    fn test_serialize_skips_absent_phone() {
        let json = serde_json::to_value(complete()).unwrap();
        assert!(json.get("phone").is_none());
        assert_eq!(json["name"], "Ada");
    }
}
