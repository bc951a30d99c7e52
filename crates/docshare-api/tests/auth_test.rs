//! HTTP tests for authentication, profile endpoints, health, and media.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::json;

use docshare_auth::JwtEncoder;
use docshare_core::config::AuthConfig;
use docshare_core::types::UserId;

use common::{TestApp, assert_error};

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_detailed_health_reports_unreachable_database() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health/detailed", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "degraded");
    assert_eq!(response.body["data"]["database"], "unavailable");
    assert_eq!(response.body["data"]["storage"], "available");
}

#[tokio::test]
async fn test_register_rejects_invalid_email() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "email": "nobody", "password": "long enough password" })),
            None,
        )
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "INVALID_INPUT");
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "email": "ada@example.com", "password": "short" })),
            None,
        )
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "INVALID_INPUT");
}

#[tokio::test]
async fn test_login_requires_password() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "ada@example.com", "password": "" })),
            None,
        )
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "INVALID_INPUT");
}

#[tokio::test]
async fn test_me_rejects_bad_credentials() {
    let app = TestApp::new().await;
    let foreign = JwtEncoder::new(&AuthConfig {
        jwt_secret: "some-other-secret".to_string(),
        ..AuthConfig::default()
    })
    .generate_access_token(UserId::new(), "ada@example.com")
    .expect("token")
    .token;

    for header_value in [
        None,
        Some("Basic YWRhOnNlY3JldA==".to_string()),
        Some("Bearer not.a.jwt".to_string()),
        Some(format!("Bearer {foreign}")),
    ] {
        let mut builder = Request::builder().method("GET").uri("/api/auth/me");
        if let Some(value) = header_value {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let response = app
            .send(builder.body(Body::empty()).expect("request"))
            .await;
        assert_error(&response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED");
    }
}

#[tokio::test]
async fn test_profile_update_rejects_long_bio() {
    let app = TestApp::new().await;
    let token = app.token_for(UserId::new(), "ada@example.com");

    let response = app
        .request(
            "PUT",
            "/api/users/me",
            Some(json!({ "bio": "x".repeat(501) })),
            Some(&token),
        )
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "INVALID_INPUT");
}

fn multipart_body(boundary: &str, field: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"avatar\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}

fn avatar_request(token: &str, field: &str, content_type: &str, data: &[u8]) -> Request<Body> {
    let boundary = "docshare-test-boundary";
    Request::builder()
        .method("POST")
        .uri("/api/users/me/avatar")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(multipart_body(boundary, field, content_type, data)))
        .expect("request")
}

#[tokio::test]
async fn test_avatar_rejects_unsupported_type() {
    let app = TestApp::new().await;
    let token = app.token_for(UserId::new(), "ada@example.com");

    let response = app
        .send(avatar_request(&token, "avatar", "text/plain", b"hello"))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "INVALID_INPUT");
}

#[tokio::test]
async fn test_avatar_rejects_oversized_file() {
    let app = TestApp::with_config(|config| config.storage.max_avatar_size_bytes = 16).await;
    let token = app.token_for(UserId::new(), "ada@example.com");

    let response = app
        .send(avatar_request(&token, "avatar", "image/png", &[0u8; 64]))
        .await;

    assert_error(&response, StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn test_avatar_requires_file_field() {
    let app = TestApp::new().await;
    let token = app.token_for(UserId::new(), "ada@example.com");

    let response = app
        .send(avatar_request(&token, "picture", "image/png", b"png"))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "INVALID_INPUT");
}

#[tokio::test]
async fn test_stored_media_is_served() {
    let app = TestApp::new().await;
    let dir = app.media_root().join("avatars");
    std::fs::create_dir_all(&dir).expect("mkdir");
    std::fs::write(dir.join("pixel.png"), b"not really a png").expect("write");

    let response = app
        .send(
            Request::builder()
                .uri("/media/avatars/pixel.png")
                .body(Body::empty())
                .expect("request"),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}
