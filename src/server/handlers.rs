//! Submission endpoint handlers.
//!
//! Both endpoints share one contract and differ only in the email theme.

use super::AppState;
use crate::models::ContactSubmission;
use crate::render::Theme;
use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, error, info};

/// Largest submission body read; anything bigger is answered like an unreadable body.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Body of a successful submission.
#[derive(Debug, Serialize)]
pub struct SendEmailResponse {
    pub success: bool,
    /// Provider response payload, passed through unchanged
    pub data: serde_json::Value,
}

/// Ways a submission request can fail.
///
/// Response bodies stay generic; details go to the log only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionError {
    MethodNotAllowed,
    MissingFields,
    SendFailed,
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        match self {
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(json!({ "error": "Method not allowed" })),
            )
                .into_response(),
            Self::MissingFields => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Missing required fields" })),
            )
                .into_response(),
            Self::SendFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "Failed to send email" })),
            )
                .into_response(),
        }
    }
}

/// `/api/send-email`
pub async fn send_email(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<SendEmailResponse>, SubmissionError> {
    handle_submission(&state, Theme::light(), request).await
}

/// `/api/emails-api`
pub async fn emails_api(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<SendEmailResponse>, SubmissionError> {
    handle_submission(&state, Theme::dark(), request).await
}

/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn handle_submission(
    state: &AppState,
    theme: &Theme,
    request: Request,
) -> Result<Json<SendEmailResponse>, SubmissionError> {
    // The method is checked before any of the body is read
    if request.method() != Method::POST {
        return Err(SubmissionError::MethodNotAllowed);
    }

    state.metrics.record_submission_received();

    let body = match axum::body::to_bytes(request.into_body(), MAX_BODY_BYTES).await {
        Ok(body) => body,
        Err(e) => {
            debug!("Failed to read submission body: {}", e);
            state.metrics.record_submission_rejected();
            return Err(SubmissionError::MissingFields);
        }
    };

    // A body that is not a JSON object of strings counts as missing fields
    let submission = match serde_json::from_slice::<ContactSubmission>(&body) {
        Ok(submission) if submission.has_required_fields() => submission,
        Ok(_) => {
            state.metrics.record_submission_rejected();
            return Err(SubmissionError::MissingFields);
        }
        Err(e) => {
            debug!("Unreadable submission body: {}", e);
            state.metrics.record_submission_rejected();
            return Err(SubmissionError::MissingFields);
        }
    };

    info!(
        theme = theme.name,
        has_phone = submission.phone.is_some(),
        "Contact submission accepted"
    );

    match state.service.dispatch(&submission, theme).await {
        Ok(data) => {
            state.metrics.record_email_sent();
            Ok(Json(SendEmailResponse {
                success: true,
                data,
            }))
        }
        Err(e) => {
            error!("Error sending email: {}", e);
            state.metrics.record_send_failure();
            Err(SubmissionError::SendFailed)
        }
    }
}
