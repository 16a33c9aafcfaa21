//! Tests for the voice token broker endpoint, driven through the real
//! router with a mock upstream.

mod common;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
};
use common::{body_json, test_app};
use server_core::kernel::test_dependencies::{MockVoiceService, VoiceCall};
use tower::ServiceExt;

fn token_request(body: Body) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/voice/token")
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap()
}

#[tokio::test]
async fn missing_body_defaults_to_webrtc_and_relays_the_token() {
    let mock = Arc::new(MockVoiceService::new().with_token("abc"));
    let app = test_app(Some(mock.clone()));

    let response = app.oneshot(token_request(Body::empty())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, serde_json::json!({ "token": "abc" }));
    assert_eq!(mock.calls(), vec![VoiceCall::ConversationToken]);
}

#[tokio::test]
async fn websocket_request_relays_the_signed_url() {
    let mock = Arc::new(MockVoiceService::new().with_signed_url("wss://upstream/signed"));
    let app = test_app(Some(mock.clone()));

    let response = app
        .oneshot(token_request(Body::from(
            r#"{"connectionType":"websocket"}"#,
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, serde_json::json!({ "signed_url": "wss://upstream/signed" }));
    assert_eq!(mock.calls(), vec![VoiceCall::SignedUrl]);
}

#[tokio::test]
async fn malformed_body_behaves_as_webrtc() {
    let mock = Arc::new(MockVoiceService::new().with_token("abc"));
    let app = test_app(Some(mock.clone()));

    let response = app
        .oneshot(token_request(Body::from("{not json")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(mock.calls(), vec![VoiceCall::ConversationToken]);
}

#[tokio::test]
async fn unknown_connection_type_falls_back_to_webrtc() {
    let mock = Arc::new(MockVoiceService::new().with_token("abc"));
    let app = test_app(Some(mock.clone()));

    let response = app
        .oneshot(token_request(Body::from(
            r#"{"connectionType":"carrier-pigeon"}"#,
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(mock.calls(), vec![VoiceCall::ConversationToken]);
}

#[tokio::test]
async fn missing_configuration_fails_without_an_upstream_call() {
    let app = test_app(None);

    let response = app.oneshot(token_request(Body::empty())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("not configured"));
}

#[tokio::test]
async fn upstream_failure_collapses_to_a_generic_error() {
    let mock = Arc::new(MockVoiceService::new().with_signed_url_error("upstream said 502"));
    let app = test_app(Some(mock.clone()));

    let response = app
        .oneshot(token_request(Body::from(
            r#"{"connectionType":"websocket"}"#,
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    // Generic message only - upstream details stay server-side
    let message = body["error"].as_str().unwrap();
    assert!(!message.contains("502"));
    assert!(body.get("signed_url").is_none());
}

#[tokio::test]
async fn options_preflight_returns_ok_with_cors_headers() {
    let app = test_app(None);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/voice/token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap()),
        Some("*")
    );
}

#[tokio::test]
async fn error_responses_still_carry_cors_headers() {
    let app = test_app(None);

    let response = app.oneshot(token_request(Body::empty())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap()),
        Some("*")
    );
}
