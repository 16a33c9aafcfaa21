//! Shared helpers for integration tests.

use std::sync::Arc;

use axum::{body::Body, http::Response, Router};
use chrono::Utc;
use http_body_util::BodyExt;
use server_core::common::ListingId;
use server_core::domains::listings::{ListingCatalog, PropertyListing};
use server_core::kernel::{BaseVoiceService, ServerDeps};
use server_core::server::build_app;

/// Build the real router over the bundled catalog with the given voice
/// service (None reproduces a deployment with missing secrets).
#[allow(dead_code)]
pub fn test_app(voice: Option<Arc<dyn BaseVoiceService>>) -> Router {
    let catalog = Arc::new(ListingCatalog::bundled());
    build_app(Arc::new(ServerDeps::new(catalog, voice)))
}

/// Collect a response body and parse it as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Minimal listing fixture for comparison tests.
#[allow(dead_code)]
pub fn listing(id: &str, address: &str) -> PropertyListing {
    PropertyListing {
        id: ListingId::from(id),
        address: address.to_string(),
        price: 350_000,
        bedrooms: 3,
        bathrooms: 2.0,
        square_feet: 1800,
        listed_at: Utc::now(),
        extra: serde_json::Map::new(),
    }
}
