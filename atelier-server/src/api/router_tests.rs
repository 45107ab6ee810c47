#![allow(clippy::unwrap_used, clippy::expect_used, reason = "test assertions")]

use axum::http::{Method, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use atelier_core::AppConfig;

use crate::router::build_router;
use crate::test_helpers::{test_state, test_state_with};

fn test_server() -> TestServer {
    TestServer::new(build_router(test_state())).unwrap()
}

const API_ROUTES: &[&str] = &[
    "/api/analyze-image",
    "/api/generate-image",
    "/api/images",
    "/api/auth/signin",
    "/api/auth/signup",
];

#[tokio::test]
async fn test_options_returns_200_on_every_route() {
    let server = test_server();

    for route in API_ROUTES {
        let response = server.method(Method::OPTIONS, route).await;
        assert_eq!(response.status_code(), StatusCode::OK, "OPTIONS {} should be 200", route);
    }

    let response = server.method(Method::OPTIONS, "/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_non_matching_method_is_405_with_json_envelope() {
    let server = test_server();

    let response = server.get("/api/analyze-image").await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = response.json();
    assert_eq!(body["error"], "Method not allowed");

    let response = server.post("/api/images").await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_paths_are_404_with_json_envelope() {
    let server = test_server();

    for path in ["/api/does-not-exist", "/nowhere"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND, "GET {}", path);
        let body: Value = response.json();
        assert_eq!(body["error"], "Endpoint not found");
    }
}

#[tokio::test]
async fn test_health_check() {
    let server = test_server();

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "OK");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_generate_missing_prompt_envelope() {
    let server = test_server();

    let response = server.post("/api/generate-image").json(&json!({})).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Prompt is required");
}

#[tokio::test]
async fn test_generate_happy_path_envelope() {
    let server = test_server();

    let response = server
        .post("/api/generate-image")
        .json(&json!({"prompt": "a red fox", "aspectRatio": "16:9"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["prompt"], "a red fox");
    let url = body["imageUrl"].as_str().unwrap();
    assert!(url.contains("a%20red%20fox"));
    assert!(url.contains("width=1920"));
    assert!(url.contains("height=1080"));
}

#[tokio::test]
async fn test_analyze_json_without_image_is_400() {
    let server = test_server();

    let response = server
        .post("/api/analyze-image")
        .json(&json!({"artStyle": "paper", "styleIntensity": "strong"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "No image data provided");
}

#[tokio::test]
async fn test_analyze_multipart_without_image_is_400() {
    let server = test_server();

    let boundary = "X-ATELIER-TEST-BOUNDARY";
    let body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"artStyle\"\r\n\r\npaper\r\n--{boundary}--\r\n"
    );

    let response = server
        .post("/api/analyze-image")
        .bytes(body.into_bytes().into())
        .content_type(&format!("multipart/form-data; boundary={boundary}"))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "No image file provided");
}

#[tokio::test]
async fn test_analyze_without_api_key_is_explicit_config_error() {
    // No GEMINI_API_KEY in the test config
    let server = test_server();

    let response = server
        .post("/api/analyze-image")
        .json(&json!({"imageData": "data:image/png;base64,aGVsbG8="}))
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "GEMINI_API_KEY is not configured");
}

#[tokio::test]
async fn test_analyze_json_forwards_to_vision_upstream() {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(r"/models/.*:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"parts": [{"text": "A strong paper art style illustration of a fox."}]}
            }]
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    let config = AppConfig {
        gemini_api_key: Some("test-key".to_string()),
        gemini_base_url: Some(format!("{}/v1beta", upstream.uri())),
        ..Default::default()
    };
    let server = TestServer::new(build_router(test_state_with(config))).unwrap();

    let response = server
        .post("/api/analyze-image")
        .json(&json!({
            "imageData": "data:image/jpeg;base64,/9j/4AAQ",
            "artStyle": "paper",
            "styleIntensity": "strong"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["description"], "A strong paper art style illustration of a fox.");
}

#[tokio::test]
async fn test_analyze_multipart_forwards_to_vision_upstream() {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(r"/models/.*:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"parts": [{"text": "A moderate paper art style illustration of a cat."}]}
            }]
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    let config = AppConfig {
        gemini_api_key: Some("test-key".to_string()),
        gemini_base_url: Some(format!("{}/v1beta", upstream.uri())),
        ..Default::default()
    };
    let server = TestServer::new(build_router(test_state_with(config))).unwrap();

    let boundary = "X-ATELIER-TEST-BOUNDARY";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"image\"; filename=\"cat.png\"\r\n\
         Content-Type: image/png\r\n\r\n\
         fake png bytes\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"styleIntensity\"\r\n\r\n\
         moderate\r\n\
         --{boundary}--\r\n"
    );

    let response = server
        .post("/api/analyze-image")
        .bytes(body.into_bytes().into())
        .content_type(&format!("multipart/form-data; boundary={boundary}"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["description"], "A moderate paper art style illustration of a cat.");
}

#[tokio::test]
async fn test_analyze_upstream_rejection_surfaces_as_500() {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(r"/models/.*:generateContent"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 400, "message": "bad key", "status": "INVALID_ARGUMENT"}
        })))
        .mount(&upstream)
        .await;

    let config = AppConfig {
        gemini_api_key: Some("bad-key".to_string()),
        gemini_base_url: Some(format!("{}/v1beta", upstream.uri())),
        ..Default::default()
    };
    let server = TestServer::new(build_router(test_state_with(config))).unwrap();

    let response = server
        .post("/api/analyze-image")
        .json(&json!({"imageData": "data:image/png;base64,aGVsbG8="}))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Gemini API error: bad key");
}

#[tokio::test]
async fn test_auth_missing_credentials_envelope() {
    let server = test_server();

    let response = server
        .post("/api/auth/signin")
        .json(&json!({"email": "fox@example.com"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Email and password are required");
}

#[tokio::test]
async fn test_rate_limit_kicks_in_and_spares_preflight() {
    let config = AppConfig {
        rate_limit_window_secs: 60,
        rate_limit_max_requests: 2,
        ..Default::default()
    };
    let server = TestServer::new(build_router(test_state_with(config))).unwrap();

    for _ in 0..2 {
        let response = server.post("/api/generate-image").json(&json!({})).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    let response = server.post("/api/generate-image").json(&json!({})).await;
    assert_eq!(response.status_code(), StatusCode::TOO_MANY_REQUESTS);
    let body: Value = response.json();
    assert_eq!(body["error"], "Too many requests, please try again later.");

    // OPTIONS is exempt so browsers still get their CORS answer
    let response = server.method(Method::OPTIONS, "/api/generate-image").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_images_listing_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["002.png", "001.jpg"] {
        std::fs::write(dir.path().join(name), b"x").unwrap();
    }

    let config = AppConfig { images_dir: dir.path().to_path_buf(), ..Default::default() };
    let server = TestServer::new(build_router(test_state_with(config))).unwrap();

    let response = server.get("/api/images").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["images"], json!(["001.jpg", "002.png"]));
}
