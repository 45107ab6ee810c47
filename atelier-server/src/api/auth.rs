//! Authentication passthrough: signin, signup

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use atelier_types::GatewayError;

use crate::api::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub user: Value,
}

/// POST /api/auth/signin
pub async fn sign_in(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (email, password) = require_credentials(&body)?;

    let client = state.auth_client()?;
    let user = client.sign_in(email, password).await?;

    Ok(Json(AuthResponse { success: true, user }))
}

/// POST /api/auth/signup
pub async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (email, password) = require_credentials(&body)?;

    let client = state.auth_client()?;
    let user = client.sign_up(email, password).await?;

    Ok(Json(AuthResponse { success: true, user }))
}

fn require_credentials(body: &CredentialsRequest) -> Result<(&str, &str), GatewayError> {
    match (
        body.email.as_deref().filter(|email| !email.is_empty()),
        body.password.as_deref().filter(|password| !password.is_empty()),
    ) {
        (Some(email), Some(password)) => Ok((email, password)),
        _ => Err(GatewayError::input("Email and password are required")),
    }
}
