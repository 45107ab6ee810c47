//! Application State
//!
//! Holds the immutable configuration snapshot, the catalogs, the shared
//! HTTP client, and the rate limiter. Everything is read-only after
//! startup; handlers clone the `Arc` wrapper cheaply per request.

use std::sync::Arc;
use std::time::Duration;

use atelier_core::rate_limit::RateLimiter;
use atelier_core::upstream::auth::AuthClient;
use atelier_core::upstream::vision::VisionClient;
use atelier_core::{upstream, AppConfig};
use atelier_types::{DimensionCatalog, Result, StyleCatalog};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub config: AppConfig,
    pub http_client: reqwest::Client,
    pub style_catalog: StyleCatalog,
    pub dimension_catalog: DimensionCatalog,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    pub fn new(config: AppConfig) -> std::result::Result<Self, String> {
        let http_client = upstream::build_http_client(config.upstream_timeout_secs)?;
        let rate_limiter = RateLimiter::new(
            Duration::from_secs(config.rate_limit_window_secs),
            config.rate_limit_max_requests,
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                http_client,
                style_catalog: StyleCatalog::default(),
                dimension_catalog: DimensionCatalog::default(),
                rate_limiter,
            }),
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn style_catalog(&self) -> &StyleCatalog {
        &self.inner.style_catalog
    }

    pub fn dimension_catalog(&self) -> &DimensionCatalog {
        &self.inner.dimension_catalog
    }

    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.inner.rate_limiter
    }

    /// Vision client for one analysis request; fails with a Config error
    /// when the API key is absent.
    pub fn vision_client(&self) -> Result<VisionClient> {
        let key = self.inner.config.require_gemini_key()?;
        Ok(VisionClient::new(
            self.inner.http_client.clone(),
            key,
            self.inner.config.gemini_base_url.as_deref(),
        ))
    }

    /// Auth client; fails with a Config error when the provider URL or anon
    /// key is absent.
    pub fn auth_client(&self) -> Result<AuthClient> {
        let (url, key) = self.inner.config.require_auth_provider()?;
        Ok(AuthClient::new(self.inner.http_client.clone(), url, key))
    }
}
