//! Environment-driven configuration.
//!
//! Read once at process start; every handler sees the same immutable
//! snapshot through `AppState`. Secrets (the vision API key, the auth anon
//! key) stay in this struct and are never echoed to clients or logged.

use std::path::PathBuf;

use atelier_types::{GatewayError, Result};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 900;
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 100;
pub const DEFAULT_IMAGES_DIR: &str = "./public/images";

/// Immutable application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Vision API key. Optional at startup so the rest of the gateway can
    /// serve; analysis requests fail with a Config error until it is set.
    pub gemini_api_key: Option<String>,
    /// Override for the vision API base URL (tests point this at a mock).
    pub gemini_base_url: Option<String>,
    /// Hosted auth provider project URL.
    pub auth_url: Option<String>,
    /// Hosted auth provider anon key.
    pub auth_anon_key: Option<String>,
    /// CORS origins; empty means allow any origin.
    pub allowed_origins: Vec<String>,
    pub rate_limit_window_secs: u64,
    pub rate_limit_max_requests: u32,
    pub images_dir: PathBuf,
    pub upstream_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            gemini_api_key: None,
            gemini_base_url: None,
            auth_url: None,
            auth_anon_key: None,
            allowed_origins: Vec::new(),
            rate_limit_window_secs: DEFAULT_RATE_LIMIT_WINDOW_SECS,
            rate_limit_max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            upstream_timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            port: env_parse("ATELIER_PORT").unwrap_or(defaults.port),
            gemini_api_key: env_non_empty("GEMINI_API_KEY"),
            gemini_base_url: env_non_empty("ATELIER_GEMINI_BASE_URL"),
            auth_url: env_non_empty("SUPABASE_URL"),
            auth_anon_key: env_non_empty("SUPABASE_ANON_KEY"),
            allowed_origins: parse_origins(std::env::var("ALLOWED_ORIGINS").ok().as_deref()),
            rate_limit_window_secs: env_parse("RATE_LIMIT_WINDOW_SECS")
                .unwrap_or(defaults.rate_limit_window_secs),
            rate_limit_max_requests: env_parse("RATE_LIMIT_MAX_REQUESTS")
                .unwrap_or(defaults.rate_limit_max_requests),
            images_dir: env_non_empty("ATELIER_IMAGES_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.images_dir),
            upstream_timeout_secs: env_parse("ATELIER_UPSTREAM_TIMEOUT_SECS")
                .unwrap_or(defaults.upstream_timeout_secs),
        }
    }

    /// Vision API key, or a Config error with an explicit message so a
    /// missing key never surfaces as an opaque upstream failure.
    pub fn require_gemini_key(&self) -> Result<&str> {
        self.gemini_api_key
            .as_deref()
            .ok_or_else(|| GatewayError::config("GEMINI_API_KEY is not configured"))
    }

    /// Auth provider URL + anon key, or a Config error.
    pub fn require_auth_provider(&self) -> Result<(&str, &str)> {
        match (self.auth_url.as_deref(), self.auth_anon_key.as_deref()) {
            (Some(url), Some(key)) => Ok((url, key)),
            _ => Err(GatewayError::config(
                "SUPABASE_URL and SUPABASE_ANON_KEY are not configured",
            )),
        }
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

/// Parse a comma-separated origin list. `*`, empty, or unset all mean
/// "allow any origin".
pub fn parse_origins(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else { return Vec::new() };
    if raw.trim() == "*" {
        return Vec::new();
    }
    raw.split(',').map(str::trim).filter(|o| !o.is_empty()).map(str::to_string).collect()
}
