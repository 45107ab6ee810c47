//! Image-generation endpoint: resolve dimensions, build the render URL.
//!
//! No upstream call happens here; the URL is the deliverable and the
//! caller renders it.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use atelier_core::upstream::render::{build_render_url, freshness_seed};
use atelier_types::GatewayError;

use crate::api::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub prompt: Option<String>,
    pub aspect_ratio: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub image_url: String,
    pub prompt: String,
}

/// POST /api/generate-image
pub async fn generate_image(
    State(state): State<AppState>,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let prompt = body
        .prompt
        .as_deref()
        .map(str::trim)
        .filter(|prompt| !prompt.is_empty())
        .ok_or_else(|| GatewayError::input("Prompt is required"))?;

    let dimensions = state.dimension_catalog().resolve(body.aspect_ratio.as_deref());
    info!(
        "[Generate] ratio={} -> {}x{}",
        body.aspect_ratio.as_deref().unwrap_or("default"),
        dimensions.width,
        dimensions.height,
    );

    let image_url = build_render_url(prompt, dimensions, freshness_seed())?;

    Ok(Json(GenerateResponse { image_url, prompt: prompt.to_string() }))
}
