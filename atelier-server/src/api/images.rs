//! Gallery listing endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use atelier_core::gallery;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ImagesResponse {
    pub images: Vec<String>,
}

/// GET /api/images
pub async fn list_images(State(state): State<AppState>) -> Json<ImagesResponse> {
    let images = gallery::list_images(&state.config().images_dir).await;
    Json(ImagesResponse { images })
}
