//! Error types for the contact service.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when talking to the email provider.
#[derive(Error, Debug)]
pub enum EmailApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// API key rejected
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Provider rejected the message payload
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The blocking send task did not complete
    #[error("Send task failed: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised while turning a submission into an outbound email.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Template rendering failed
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Provider call failed
    #[error(transparent)]
    Provider(#[from] EmailApiError),
}

/// Convenience type alias for Results with EmailApiError
pub type EmailApiResult<T> = Result<T, EmailApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EmailApiError::InvalidRequest("missing `to`".to_string());
        assert_eq!(err.to_string(), "Invalid request: missing `to`");

        let err = ConfigError::MissingVar("RESEND_API_KEY".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: RESEND_API_KEY"
        );

        let err = EmailApiError::Unauthorized;
        assert_eq!(err.to_string(), "Authentication failed");

        let err = EmailApiError::Other("task cancelled".to_string());
        assert_eq!(err.to_string(), "Send task failed: task cancelled");
    }

    #[test]
    fn test_api_error_variants() {
        let err = EmailApiError::ApiError {
            status: 503,
            message: "Service unavailable".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("Service unavailable"));
    }

    #[test]
    fn test_dispatch_error_is_transparent_for_provider() {
        let err = DispatchError::from(EmailApiError::Timeout);
        assert_eq!(err.to_string(), "Request timeout");
    }
}
