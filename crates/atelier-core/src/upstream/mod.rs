//! Outbound clients for the third-party services the gateway fronts.
//!
//! - `vision` — Gemini generateContent forwarder (the only per-request
//!   network call on the analysis path)
//! - `render` — image-generation URL builder (no network; the URL is the
//!   deliverable)
//! - `auth` — hosted auth provider passthrough

pub mod auth;
pub mod render;
pub mod vision;

use std::time::Duration;

/// Build the shared HTTP client with an explicit timeout.
///
/// Accepts the timeout up front so TLS setup happens once at startup, not
/// inside a request handler.
pub fn build_http_client(timeout_secs: u64) -> Result<reqwest::Client, String> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs.max(5)))
        .tcp_nodelay(true)
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {}", e))
}
