//! Image-generation URL builder.
//!
//! The generation upstream is addressed entirely through its URL: prompt in
//! the path, dimensions and rendering flags in the query. No image bytes
//! are fetched here; the caller renders the returned URL.

use chrono::Utc;
use url::Url;

use atelier_types::{Dimensions, GatewayError, Result};

pub const RENDER_BASE_URL: &str = "https://image.pollinations.ai";
pub const RENDER_MODEL: &str = "flux";

/// Seed for the generation URL: current Unix-millis timestamp, so repeated
/// identical prompts do not collide on an upstream cache.
pub fn freshness_seed() -> i64 {
    Utc::now().timestamp_millis()
}

/// Build the generation URL for a prompt at the resolved dimensions.
///
/// The prompt is percent-encoded into a path segment; the fixed flags
/// disable the watermark, enable prompt enhancement, and pin the rendering
/// model.
pub fn build_render_url(prompt: &str, dimensions: Dimensions, seed: i64) -> Result<String> {
    let mut url = Url::parse(RENDER_BASE_URL)
        .map_err(|e| GatewayError::Internal { message: format!("render base URL: {}", e) })?;

    url.path_segments_mut()
        .map_err(|()| GatewayError::Internal { message: "render base URL cannot be a base".to_string() })?
        .push("prompt")
        .push(prompt);

    url.query_pairs_mut()
        .append_pair("width", &dimensions.width.to_string())
        .append_pair("height", &dimensions.height.to_string())
        .append_pair("seed", &seed.to_string())
        .append_pair("nologo", "true")
        .append_pair("enhance", "true")
        .append_pair("model", RENDER_MODEL);

    Ok(url.into())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_percent_encoded() {
        let dims = Dimensions { width: 1920, height: 1080 };
        let url = build_render_url("a red fox", dims, 42).unwrap();

        assert!(url.contains("/prompt/a%20red%20fox"));
        assert!(url.contains("width=1920"));
        assert!(url.contains("height=1080"));
        assert!(url.contains("seed=42"));
        assert!(url.contains("nologo=true"));
        assert!(url.contains("enhance=true"));
        assert!(url.contains("model=flux"));
    }

    #[test]
    fn test_different_seeds_produce_different_urls() {
        let dims = Dimensions { width: 1024, height: 1024 };
        let first = build_render_url("a red fox", dims, 1_700_000_000_000).unwrap();
        let second = build_render_url("a red fox", dims, 1_700_000_000_001).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_freshness_seed_is_monotonic_enough() {
        let a = freshness_seed();
        let b = freshness_seed();
        assert!(b >= a);
    }

    #[test]
    fn test_url_parses_back() {
        let dims = Dimensions { width: 1080, height: 1920 };
        let raw = build_render_url("sunset / skyline?", dims, 7).unwrap();

        let parsed = Url::parse(&raw).unwrap();
        assert_eq!(parsed.host_str(), Some("image.pollinations.ai"));
        // The slash and question mark stay inside the single path segment.
        assert_eq!(parsed.query_pairs().find(|(k, _)| k == "seed").unwrap().1, "7");
    }
}
