//! Typed error definitions for the gateway.
//!
//! All errors are designed to be:
//!
//! - **Serializable** for API responses via serde
//! - **Displayable** for logging via Display trait
//! - **Matchable** for handler logic via enum variants
//! - **Composable** via thiserror derive macros
//!
//! Every error maps to exactly one HTTP status through
//! [`GatewayError::http_status_code`]; the server boundary converts any
//! variant into the `{"error": message}` JSON envelope.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while handling a gateway request.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum GatewayError {
    /// A required request field is missing or empty
    #[error("{message}")]
    Input { message: String },

    /// The hosted auth provider rejected the credentials
    #[error("{message}")]
    Auth { message: String },

    /// Upstream service returned a non-2xx or malformed response
    #[error("{provider} error: {message}")]
    Upstream { provider: String, message: String },

    /// Upstream call succeeded but yielded no usable payload
    #[error("No {expected} generated from {provider}")]
    EmptyResult { provider: String, expected: String },

    /// A required secret or environment value is absent
    #[error("{message}")]
    Config { message: String },

    /// HTTP method does not match the route
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// No such endpoint
    #[error("Endpoint not found")]
    NotFound,

    /// Internal gateway error (bugs, unexpected states)
    #[error("{message}")]
    Internal { message: String },
}

impl GatewayError {
    /// Missing/empty request field.
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input { message: message.into() }
    }

    /// Credential rejection from the auth provider.
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth { message: message.into() }
    }

    /// Non-2xx or malformed upstream response.
    pub fn upstream(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Upstream { provider: provider.into(), message: message.into() }
    }

    /// Missing configuration value.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }

    /// Check if this is a client error (4xx equivalent).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Input { .. }
                | Self::Auth { .. }
                | Self::MethodNotAllowed
                | Self::NotFound
        )
    }

    /// Get HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Input { .. } => 400,
            Self::Auth { .. } => 401,
            Self::MethodNotAllowed => 405,
            Self::NotFound => 404,
            Self::Upstream { .. }
            | Self::EmptyResult { .. }
            | Self::Config { .. }
            | Self::Internal { .. } => 500,
        }
    }
}

/// Standard Result type using GatewayError.
pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_codes() {
        assert_eq!(GatewayError::input("Prompt is required").http_status_code(), 400);
        assert_eq!(GatewayError::auth("Invalid login credentials").http_status_code(), 401);
        assert_eq!(GatewayError::upstream("Gemini API", "bad key").http_status_code(), 500);
        assert_eq!(
            GatewayError::EmptyResult {
                provider: "Gemini API".to_string(),
                expected: "description".to_string(),
            }
            .http_status_code(),
            500
        );
        assert_eq!(GatewayError::config("GEMINI_API_KEY is not set").http_status_code(), 500);
        assert_eq!(GatewayError::MethodNotAllowed.http_status_code(), 405);
        assert_eq!(GatewayError::NotFound.http_status_code(), 404);
    }

    #[test]
    fn test_error_display() {
        let err = GatewayError::upstream("Gemini API", "bad key");
        assert_eq!(format!("{}", err), "Gemini API error: bad key");

        let err = GatewayError::EmptyResult {
            provider: "Gemini API".to_string(),
            expected: "description".to_string(),
        };
        assert_eq!(format!("{}", err), "No description generated from Gemini API");

        assert_eq!(format!("{}", GatewayError::MethodNotAllowed), "Method not allowed");
        assert_eq!(format!("{}", GatewayError::NotFound), "Endpoint not found");
    }

    #[test]
    fn test_error_serialization() {
        let err = GatewayError::input("No image file provided");

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("Input"));
        assert!(json.contains("No image file provided"));

        let deserialized: GatewayError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_is_client_error() {
        assert!(GatewayError::input("missing").is_client_error());
        assert!(GatewayError::MethodNotAllowed.is_client_error());
        assert!(!GatewayError::upstream("Gemini API", "boom").is_client_error());
        assert!(!GatewayError::config("missing key").is_client_error());
    }
}
