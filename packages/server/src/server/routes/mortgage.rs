//! Mortgage estimate endpoint.
//!
//! POST /api/mortgage/estimate with loan terms; invalid terms are a 400
//! with the same `{ "error": ... }` shape as every other failure.

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

use crate::domains::mortgage::{self, MortgageEstimate, MortgageTerms};

pub async fn mortgage_estimate_handler(
    Json(terms): Json<MortgageTerms>,
) -> Result<Json<MortgageEstimate>, (StatusCode, Json<Value>)> {
    mortgage::estimate(&terms).map(Json).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        )
    })
}
