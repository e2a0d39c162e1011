//! Configuration management for the contact service.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured when present.

use crate::domain::EmailAddress;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default Resend API base URL.
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

/// Default sender used when `CONTACT_FROM` is not set.
pub const DEFAULT_CONTACT_FROM: &str = "Portfolio <onboarding@resend.dev>";

/// Configuration for the contact service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Resend API base URL
    pub resend_api_url: String,

    /// Resend API key for authentication
    pub resend_api_key: String,

    /// Sender mailbox, e.g. `Portfolio <onboarding@resend.dev>`
    pub contact_from: String,

    /// Addresses every submission is delivered to
    pub contact_to: Vec<String>,

    /// Site name shown in the email header and footer
    pub site_name: String,

    /// Socket address the HTTP server binds to (default: 127.0.0.1:3000)
    pub bind_addr: SocketAddr,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Directory of pre-built site assets served for unmatched routes
    pub static_dir: Option<PathBuf>,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `RESEND_API_KEY`: API key for the email provider
    /// - `CONTACT_TO`: comma-separated recipient addresses
    ///
    /// Optional environment variables:
    /// - `RESEND_API_URL`: provider base URL (default: https://api.resend.com)
    /// - `CONTACT_FROM`: sender mailbox (default: `Portfolio <onboarding@resend.dev>`)
    /// - `SITE_NAME`: site name used in email copy (default: "Portfolio")
    /// - `BIND_ADDR`: listen address (default: 127.0.0.1:3000)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `STATIC_DIR`: static site directory to serve
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let resend_api_key = env::var("RESEND_API_KEY")
            .map_err(|_| ConfigError::MissingVar("RESEND_API_KEY".to_string()))?;

        if resend_api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "RESEND_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let resend_api_url =
            env::var("RESEND_API_URL").unwrap_or_else(|_| DEFAULT_RESEND_API_URL.to_string());

        if !resend_api_url.starts_with("http://") && !resend_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "RESEND_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let contact_to = env::var("CONTACT_TO")
            .map_err(|_| ConfigError::MissingVar("CONTACT_TO".to_string()))?;
        let contact_to = Self::parse_recipients(&contact_to)?;

        let contact_from =
            env::var("CONTACT_FROM").unwrap_or_else(|_| DEFAULT_CONTACT_FROM.to_string());
        let site_name = env::var("SITE_NAME").unwrap_or_else(|_| "Portfolio".to_string());

        let bind_addr = match env::var("BIND_ADDR") {
            Ok(val) => val.parse::<SocketAddr>().map_err(|_| ConfigError::InvalidValue {
                var: "BIND_ADDR".to_string(),
                reason: format!("Must be a socket address like 127.0.0.1:3000, got: {}", val),
            })?,
            Err(_) => SocketAddr::from(([127, 0, 0, 1], 3000)),
        };

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let static_dir = env::var("STATIC_DIR").ok().map(PathBuf::from);
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            resend_api_url,
            resend_api_key,
            contact_from,
            contact_to,
            site_name,
            bind_addr,
            request_timeout,
            static_dir,
            log_level,
        })
    }

    /// Split a comma-separated recipient list, checking every address.
    fn parse_recipients(raw: &str) -> ConfigResult<Vec<String>> {
        let recipients: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                EmailAddress::new(s)
                    .map(EmailAddress::into_inner)
                    .map_err(|e| ConfigError::InvalidValue {
                        var: "CONTACT_TO".to_string(),
                        reason: e.to_string(),
                    })
            })
            .collect::<ConfigResult<_>>()?;

        if recipients.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_TO".to_string(),
                reason: "At least one recipient is required".to_string(),
            });
        }

        Ok(recipients)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            resend_api_url: DEFAULT_RESEND_API_URL.to_string(),
            resend_api_key: String::new(),
            contact_from: DEFAULT_CONTACT_FROM.to_string(),
            contact_to: Vec::new(),
            site_name: "Portfolio".to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            request_timeout: 10,
            static_dir: None,
            log_level: "info".to_string(),
        }
    }
}
