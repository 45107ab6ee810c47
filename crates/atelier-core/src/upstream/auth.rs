//! Hosted auth provider passthrough.
//!
//! Forwards password credentials to a GoTrue-style provider (signin via the
//! password grant, signup via the registration endpoint). The gateway keeps
//! no session state; the provider's user object is passed back to the
//! caller as-is.

use reqwest::Client;
use serde_json::{json, Value};
use tracing::warn;

use atelier_types::{GatewayError, Result};

pub const PROVIDER: &str = "Auth provider";

pub struct AuthClient {
    http_client: Client,
    base_url: String,
    anon_key: String,
}

impl AuthClient {
    pub fn new(http_client: Client, base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    /// Password signin. Returns the provider's user object.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Value> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);
        self.forward_credentials(&url, email, password).await
    }

    /// Registration. Returns the provider's user object.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Value> {
        let url = format!("{}/auth/v1/signup", self.base_url);
        self.forward_credentials(&url, email, password).await
    }

    async fn forward_credentials(&self, url: &str, email: &str, password: &str) -> Result<Value> {
        let response = self
            .http_client
            .post(url)
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| {
                let message = e.without_url().to_string();
                warn!("{} request failed: {}", PROVIDER, message);
                GatewayError::upstream(PROVIDER, message)
            })?;

        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        if !status.is_success() {
            return Err(GatewayError::auth(rejection_message(&body, status)));
        }

        // The token endpoint nests the user next to the session; the signup
        // endpoint may return the user object at the top level.
        Ok(body.get("user").cloned().unwrap_or(body))
    }
}

/// Pull the human-readable rejection out of the provider's error body,
/// whichever of its historical field names it used.
fn rejection_message(body: &Value, status: reqwest::StatusCode) -> String {
    for field in ["error_description", "msg", "message", "error"] {
        if let Some(message) = body.get(field).and_then(Value::as_str) {
            return message.to_string();
        }
    }
    status.canonical_reason().unwrap_or("authentication failed").to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message_field_priority() {
        let body = json!({"error_description": "Invalid login credentials", "msg": "other"});
        assert_eq!(
            rejection_message(&body, reqwest::StatusCode::BAD_REQUEST),
            "Invalid login credentials"
        );

        let body = json!({"msg": "User already registered"});
        assert_eq!(
            rejection_message(&body, reqwest::StatusCode::UNPROCESSABLE_ENTITY),
            "User already registered"
        );
    }

    #[test]
    fn test_rejection_message_falls_back_to_status() {
        assert_eq!(
            rejection_message(&Value::Null, reqwest::StatusCode::BAD_GATEWAY),
            "Bad Gateway"
        );
    }
}
