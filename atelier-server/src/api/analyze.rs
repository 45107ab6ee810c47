//! Image-analysis endpoint: normalize the inbound image, compose the style
//! prompt, forward to the vision upstream.

use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use atelier_core::style::build_analysis_prompt;
use atelier_core::ImagePayload;
use atelier_types::GatewayError;

use crate::api::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeJsonBody {
    pub art_style: Option<String>,
    pub style_intensity: Option<String>,
    /// Data-URI or raw base64.
    pub image_data: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub description: String,
}

struct AnalyzeInput {
    image: ImagePayload,
    art_style: Option<String>,
    style_intensity: Option<String>,
}

/// POST /api/analyze-image
///
/// Accepts either a multipart form (image file + style fields) or a JSON
/// body (data-URI / raw base64 + style fields), selected by Content-Type.
pub async fn analyze_image(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let input = normalize_request(request).await?;

    info!(
        "[Analyze] {} image, style={} intensity={}",
        input.image.mime_type,
        input.art_style.as_deref().unwrap_or("default"),
        input.style_intensity.as_deref().unwrap_or("default"),
    );

    let prompt = build_analysis_prompt(
        state.style_catalog(),
        input.art_style.as_deref(),
        input.style_intensity.as_deref(),
    );

    let vision = state.vision_client()?;
    let description = vision.describe_image(&prompt, &input.image).await?;

    Ok(Json(AnalyzeResponse { description }))
}

/// Capability-polymorphic decode: one normalized input from either wire
/// shape.
async fn normalize_request(request: Request) -> Result<AnalyzeInput, ApiError> {
    let is_multipart = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"));

    if is_multipart {
        let multipart = Multipart::from_request(request, &())
            .await
            .map_err(|e| GatewayError::input(format!("Multipart error: {}", e)))?;
        read_multipart(multipart).await
    } else {
        let Json(body) = Json::<AnalyzeJsonBody>::from_request(request, &())
            .await
            .map_err(|_| GatewayError::input("Invalid JSON body"))?;
        read_json(body)
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<AnalyzeInput, ApiError> {
    let mut image = None;
    let mut art_style = None;
    let mut style_intensity = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| GatewayError::input(format!("Multipart error: {}", e)))?
    {
        match field.name().unwrap_or("") {
            "image" => {
                let mime_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| GatewayError::input(format!("Image read error: {}", e)))?;
                image = Some(ImagePayload::from_bytes(&data, mime_type.as_deref()));
            }
            "artStyle" => {
                art_style = field.text().await.ok().filter(|value| !value.is_empty());
            }
            "styleIntensity" => {
                style_intensity = field.text().await.ok().filter(|value| !value.is_empty());
            }
            _ => {}
        }
    }

    let image = image.ok_or_else(|| GatewayError::input("No image file provided"))?;
    Ok(AnalyzeInput { image, art_style, style_intensity })
}

fn read_json(body: AnalyzeJsonBody) -> Result<AnalyzeInput, ApiError> {
    let image_data = body
        .image_data
        .filter(|value| !value.is_empty())
        .ok_or_else(|| GatewayError::input("No image data provided"))?;

    Ok(AnalyzeInput {
        image: ImagePayload::from_json_field(&image_data),
        art_style: body.art_style.filter(|value| !value.is_empty()),
        style_intensity: body.style_intensity.filter(|value| !value.is_empty()),
    })
}
