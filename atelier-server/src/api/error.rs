//! HTTP boundary for the error taxonomy.
//!
//! Handlers return `Result<Json<T>, ApiError>`; `?` on any core call
//! converts through `From<GatewayError>` and renders as the
//! `{"error": message}` envelope with the taxonomy's status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use atelier_types::GatewayError;

#[derive(Debug)]
pub struct ApiError(pub GatewayError);

impl From<GatewayError> for ApiError {
    fn from(error: GatewayError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if !self.0.is_client_error() {
            tracing::error!("request failed: {}", self.0);
        }

        (status, Json(serde_json::json!({ "error": self.0.to_string() }))).into_response()
    }
}
