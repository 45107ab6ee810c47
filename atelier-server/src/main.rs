//! Atelier Server - Gateway Daemon
//!
//! A pure Rust HTTP gateway that:
//! - Forwards image-analysis requests to the Gemini vision API on /api/analyze-image
//! - Builds image-generation URLs on /api/generate-image
//! - Passes credentials through to the hosted auth provider on /api/auth/*
//! - Lists available gallery images on /api/images

use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod cli;
mod middleware;
mod router;
mod state;

#[cfg(test)]
mod test_helpers;

use atelier_core::AppConfig;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let mut config = AppConfig::from_env();
    config.port = args.port;

    if config.gemini_api_key.is_none() {
        warn!("⚠️ GEMINI_API_KEY is not set - analysis requests will fail with a configuration error");
    }
    if config.auth_url.is_none() || config.auth_anon_key.is_none() {
        warn!("⚠️ Auth provider is not configured - signin/signup will fail with a configuration error");
    }

    let state = AppState::new(config).map_err(|e| anyhow::anyhow!(e))?;
    info!("✅ Application state initialized");

    let app = router::build_router(state);

    let addr = SocketAddr::new(args.host, args.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("📊 Health check at http://{}/health", addr);
    info!("🎨 API available at http://{}/api/", addr);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;

    Ok(())
}
