//! API Routes
//!
//! One route per endpoint; every route answers OPTIONS with 200 and any
//! other unmatched method with the 405 JSON envelope. Unknown `/api` paths
//! fall back to the 404 envelope.

mod analyze;
mod auth;
mod error;
mod generate;
mod images;

#[cfg(test)]
mod router_tests;

pub use error::ApiError;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;

use atelier_types::GatewayError;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/analyze-image",
            post(analyze::analyze_image).options(preflight).fallback(method_not_allowed),
        )
        .route(
            "/generate-image",
            post(generate::generate_image).options(preflight).fallback(method_not_allowed),
        )
        .route("/images", get(images::list_images).options(preflight).fallback(method_not_allowed))
        .route(
            "/auth/signin",
            post(auth::sign_in).options(preflight).fallback(method_not_allowed),
        )
        .route(
            "/auth/signup",
            post(auth::sign_up).options(preflight).fallback(method_not_allowed),
        )
        // API fallback: return 404 for unknown API endpoints
        .fallback(api_not_found)
}

/// Non-preflight OPTIONS requests bypass the CORS layer; answer them with
/// a plain 200 so every route honors OPTIONS regardless of headers.
pub(crate) async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub(crate) async fn method_not_allowed() -> ApiError {
    ApiError::from(GatewayError::MethodNotAllowed)
}

pub async fn api_not_found() -> impl IntoResponse {
    ApiError::from(GatewayError::NotFound)
}
