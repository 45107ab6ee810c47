//! Request-level middleware.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use atelier_core::rate_limit::RATE_LIMIT_MESSAGE;

use crate::state::AppState;

/// Fixed-window rate limiting keyed by client IP.
///
/// Preflight requests are exempt: a browser must always get its CORS
/// answer even when the client is throttled.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS {
        return next.run(request).await;
    }

    let key = client_key(&request);
    if !state.rate_limiter().check(&key) {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(serde_json::json!({ "error": RATE_LIMIT_MESSAGE })),
        )
            .into_response();
    }

    next.run(request).await
}

/// First hop of X-Forwarded-For when present (the gateway typically sits
/// behind a proxy), else the peer address.
fn client_key(request: &Request) -> String {
    if let Some(forwarded) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
    {
        return forwarded.to_string();
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_key_prefers_forwarded_header() {
        let request = axum::http::Request::builder()
            .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
            .body(axum::body::Body::empty())
            .expect("request builds");
        assert_eq!(client_key(&request), "203.0.113.7");
    }

    #[test]
    fn test_client_key_without_peer_info() {
        let request = axum::http::Request::builder()
            .body(axum::body::Body::empty())
            .expect("request builds");
        assert_eq!(client_key(&request), "unknown");
    }
}
