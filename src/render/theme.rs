//! Visual themes for the notification email.
//!
//! Both submission endpoints share one template; a theme only swaps colors,
//! labels and copy.

/// Style and label configuration for one rendering of the contact email.
///
/// Fields ending in `_style` are inline CSS declarations (with trailing `;`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    /// Emoji placed before "New Inquiry:" in the subject line
    pub subject_prefix: &'static str,

    pub font_family: &'static str,
    pub page_bg: &'static str,
    pub card_style: &'static str,
    pub header_bg: &'static str,
    pub header_title: &'static str,
    pub title_color: &'static str,
    pub subtitle_color: &'static str,

    pub alert_style: &'static str,
    pub alert_text_color: &'static str,
    pub alert_text: &'static str,

    pub name_label: &'static str,
    pub email_label: &'static str,
    pub phone_label: &'static str,
    pub subject_label: &'static str,
    pub message_label: &'static str,
    pub label_color: &'static str,
    pub value_color: &'static str,
    pub link_color: &'static str,
    pub row_border: &'static str,

    pub message_box_style: &'static str,
    pub message_text_color: &'static str,

    pub actions_style: &'static str,
    pub actions_title_color: &'static str,
    pub reply_button_style: &'static str,
    pub call_button_style: &'static str,

    pub footer_bg: &'static str,
    pub footer_text_color: &'static str,
}

/// Light card on a grey page with orange accents.
pub static LIGHT: Theme = Theme {
    name: "light",
    subject_prefix: "🎨",

    font_family: "Arial, sans-serif",
    page_bg: "#f4f4f4",
    card_style: "background-color: #ffffff; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);",
    header_bg: "linear-gradient(135deg, #1e3a8a 0%, #1e40af 100%)",
    header_title: "📬 New Contact Form",
    title_color: "#ffffff",
    subtitle_color: "#e0e7ff",

    alert_style: "background-color: #fef3c7; border-left: 4px solid #f59e0b;",
    alert_text_color: "#92400e",
    alert_text: "⚡ New client inquiry received!",

    name_label: "👤 Name:",
    email_label: "📧 Email:",
    phone_label: "📱 Phone:",
    subject_label: "📝 Subject:",
    message_label: "💬 Message:",
    label_color: "#374151",
    value_color: "#1f2937",
    link_color: "#2563eb",
    row_border: "#e5e7eb",

    message_box_style: "background-color: #f9fafb; border-left: 3px solid #f97316;",
    message_text_color: "#1f2937",

    actions_style: "background-color: #eff6ff;",
    actions_title_color: "#1e40af",
    reply_button_style: "background-color: #f97316; color: #ffffff; border-radius: 25px;",
    call_button_style: "background-color: #1e40af; color: #ffffff; border-radius: 25px;",

    footer_bg: "#f9fafb",
    footer_text_color: "#6b7280",
};

/// Dark glass card with monochrome accents.
pub static DARK: Theme = Theme {
    name: "dark",
    subject_prefix: "💼",

    font_family: "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif",
    page_bg: "#0a0f1e",
    card_style: "background-color: #02071b; border: 1px solid rgba(255, 255, 255, 0.1); border-radius: 16px; overflow: hidden;",
    header_bg: "linear-gradient(135deg, #1a1f35 0%, #0a0f1e 100%)",
    header_title: "New Contact Inquiry",
    title_color: "#ffffff",
    subtitle_color: "#9ca3af",

    alert_style: "background: rgba(255, 255, 255, 0.05); border-left: 3px solid #ffffff;",
    alert_text_color: "#f3f4f6",
    alert_text: "⚡ You have a new message from your portfolio website",

    name_label: "CONTACT NAME",
    email_label: "EMAIL ADDRESS",
    phone_label: "PHONE NUMBER",
    subject_label: "SUBJECT",
    message_label: "MESSAGE",
    label_color: "#9ca3af",
    value_color: "#f9fafb",
    link_color: "#e5e7eb",
    row_border: "rgba(255, 255, 255, 0.1)",

    message_box_style: "background: rgba(255, 255, 255, 0.03); border: 1px solid rgba(255, 255, 255, 0.1); border-left: 3px solid rgba(255, 255, 255, 0.3);",
    message_text_color: "#d1d5db",

    actions_style: "background: rgba(255, 255, 255, 0.05); border: 1px solid rgba(255, 255, 255, 0.1);",
    actions_title_color: "#f3f4f6",
    reply_button_style: "background: linear-gradient(135deg, #f9fafb 0%, #e5e7eb 100%); color: #111827; border-radius: 10px;",
    call_button_style: "background: rgba(255, 255, 255, 0.1); color: #ffffff; border-radius: 10px; border: 1px solid rgba(255, 255, 255, 0.2);",

    footer_bg: "rgba(255, 255, 255, 0.02)",
    footer_text_color: "#6b7280",
};

impl Theme {
    pub fn light() -> &'static Theme {
        &LIGHT
    }

    pub fn dark() -> &'static Theme {
        &DARK
    }
}
