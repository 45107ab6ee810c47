//! Vision-analysis forwarder.
//!
//! Builds a single generateContent call against the Gemini API: composed
//! text prompt, inline image payload, fixed generation config. One POST, no
//! retry; the client's timeout bounds the call and expiry surfaces as an
//! upstream error. The API key travels only in the request query and is
//! never logged.

use reqwest::Client;
use tracing::{debug, warn};

use atelier_types::protocol::gemini::{
    GeminiContent, GeminiErrorBody, GeminiGenerationConfig, GeminiPart, GenerateContentRequest,
    GenerateContentResponse,
};
use atelier_types::{GatewayError, Result};

use crate::image::ImagePayload;

pub const PROVIDER: &str = "Gemini API";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

/// Fixed generation config: biases the model toward a short, single
/// paragraph rather than creative variation.
pub fn analysis_generation_config() -> GeminiGenerationConfig {
    GeminiGenerationConfig { temperature: 0.7, top_k: 40, top_p: 0.9, max_output_tokens: 200 }
}

pub struct VisionClient {
    http_client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl VisionClient {
    /// Create a client for the given key. `base_url` override lets tests
    /// point at a mock server.
    pub fn new(http_client: Client, api_key: impl Into<String>, base_url: Option<&str>) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
            base_url: base_url.unwrap_or(DEFAULT_BASE_URL).trim_end_matches('/').to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Forward one analysis request and extract the textual result.
    pub async fn describe_image(&self, prompt: &str, image: &ImagePayload) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![GeminiContent::new(vec![
                GeminiPart::text(prompt),
                GeminiPart::inline_data(&image.mime_type, &image.data),
            ])],
            generation_config: analysis_generation_config(),
        };

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        debug!("Forwarding analysis request to {} ({})", PROVIDER, self.model);

        let response = self
            .http_client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let message = redact_send_error(e);
                warn!("{} request failed: {}", PROVIDER, message);
                GatewayError::upstream(PROVIDER, message)
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<GeminiErrorBody>().await {
                Ok(body) => body.error.message,
                Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
            };
            warn!("{} returned {}: {}", PROVIDER, status, message);
            return Err(GatewayError::upstream(PROVIDER, message));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::upstream(PROVIDER, format!("malformed response: {}", e)))?;

        body.first_text()
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| GatewayError::EmptyResult {
                provider: PROVIDER.to_string(),
                expected: "description".to_string(),
            })
    }
}

/// reqwest errors can echo the full request URL, which carries the API key
/// in its query; strip the URL before the message goes anywhere.
fn redact_send_error(error: reqwest::Error) -> String {
    if error.is_timeout() {
        return "request timed out".to_string();
    }
    error.without_url().to_string()
}
