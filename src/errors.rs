#[cfg(feature = "server")]
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(feature = "server")]
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoastError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported TLD: {0}")]
    UnsupportedTld(String),

    #[error("Network timeout")]
    Timeout,

    #[error("IO error: {0}")]
    IoError(#[from] tokio::io::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Response too large")]
    ResponseTooLarge,

    #[error("Invalid UTF-8 in response")]
    InvalidUtf8,

    #[error("No registration data for {0}")]
    NoRegistrationData(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<tokio::time::error::Elapsed> for RoastError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        RoastError::Timeout
    }
}

impl RoastError {
    /// Short label used for error metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            RoastError::InvalidInput(_) => "invalid_input",
            RoastError::UnsupportedTld(_) => "unsupported_tld",
            RoastError::Timeout => "timeout",
            RoastError::IoError(_) => "io_error",
            RoastError::HttpError(_) => "http_error",
            RoastError::ResponseTooLarge => "response_too_large",
            RoastError::InvalidUtf8 => "invalid_utf8",
            RoastError::NoRegistrationData(_) => "no_registration_data",
            RoastError::ConfigError(_) => "config_error",
            RoastError::RateLimited => "rate_limited",
            RoastError::Internal(_) => "internal",
        }
    }
}

#[cfg(feature = "server")]
impl IntoResponse for RoastError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            RoastError::InvalidInput(details) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Invalid domain",
                    "details": details,
                }),
            ),
            RoastError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                json!({
                    "error": "Too many requests!",
                    "message": "Slow down! Even domains need a break. Try again in a minute.",
                }),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Failed to roast domain",
                    "message": "Something went wrong while analyzing your domain. Please try again.",
                    "details": self.to_string(),
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
