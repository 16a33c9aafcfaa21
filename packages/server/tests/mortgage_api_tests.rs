//! Tests for the mortgage estimate endpoint.

mod common;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
};
use common::{body_json, test_app};
use tower::ServiceExt;

fn estimate_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/mortgage/estimate")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn valid_terms_return_the_expected_payment() {
    let app = test_app(None);

    let response = app
        .oneshot(estimate_request(
            r#"{"price": 400000, "down_payment": 80000, "annual_rate_pct": 6.0, "term_years": 30}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["loan_amount"], 320000.0);
    assert_eq!(body["monthly_payment"], 1918.56);
}

#[tokio::test]
async fn invalid_terms_are_a_400_with_a_message() {
    let app = test_app(None);

    let response = app
        .oneshot(estimate_request(
            r#"{"price": 300000, "down_payment": 350000, "annual_rate_pct": 6.0, "term_years": 30}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("down payment"));
}
