//! Listing catalog endpoints.
//!
//! GET /api/listings      - full catalog
//! GET /api/listings/:id  - single listing or 404

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::common::ListingId;
use crate::domains::listings::PropertyListing;
use crate::server::app::AppState;

pub async fn list_listings_handler(
    Extension(state): Extension<AppState>,
) -> Json<Vec<PropertyListing>> {
    Json(state.deps.catalog.all().to_vec())
}

pub async fn get_listing_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PropertyListing>, (StatusCode, Json<Value>)> {
    let id = ListingId::from(id);
    state
        .deps
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "listing not found" })),
            )
        })
}
