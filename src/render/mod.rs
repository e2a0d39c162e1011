//! Rendering of a contact submission into an email.
//!
//! The HTML and plain-text bodies come from the askama templates
//! `templates/contact_email.html` and `templates/contact_email.txt`. Visitor
//! text is HTML-escaped in the HTML body and copied verbatim into the text body.

mod theme;

pub use theme::{Theme, DARK, LIGHT};

use crate::models::ContactSubmission;
use askama::Template;

#[derive(Template)]
#[template(path = "contact_email.html")]
struct ContactEmailHtml<'a> {
    theme: &'a Theme,
    site_name: &'a str,
    year: i32,
    name: &'a str,
    email: &'a str,
    phone: Option<&'a str>,
    subject: &'a str,
    message: &'a str,
}

#[derive(Template)]
#[template(path = "contact_email.txt")]
struct ContactEmailText<'a> {
    site_name: &'a str,
    name: &'a str,
    email: &'a str,
    phone: Option<&'a str>,
    subject: &'a str,
    message: &'a str,
}

/// Subject line and bodies for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Subject line for a submission rendered with `theme`.
pub fn email_subject(theme: &Theme, subject: &str) -> String {
    format!("{} New Inquiry: {}", theme.subject_prefix, subject)
}

/// Render the notification email for `submission`.
///
/// `year` is printed in the copyright footer.
pub fn render_email(
    submission: &ContactSubmission,
    theme: &Theme,
    site_name: &str,
    year: i32,
) -> Result<RenderedEmail, askama::Error> {
    let html = ContactEmailHtml {
        theme,
        site_name,
        year,
        name: &submission.name,
        email: &submission.email,
        phone: submission.phone(),
        subject: &submission.subject,
        message: &submission.message,
    }
    .render()?;

    let text = ContactEmailText {
        site_name,
        name: &submission.name,
        email: &submission.email,
        phone: submission.phone(),
        subject: &submission.subject,
        message: &submission.message,
    }
    .render()?;

    Ok(RenderedEmail {
        subject: email_subject(theme, &submission.subject),
        html,
        text,
    })
}
