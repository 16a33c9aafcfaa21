use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    listings: usize,
    voice: VoiceHealth,
}

#[derive(Serialize)]
pub struct VoiceHealth {
    status: String,
}

/// Health check endpoint
///
/// Reports:
/// - Listing catalog size
/// - Whether the voice upstream is configured
///
/// There is no database or queue behind this service, so the check is
/// always 200 once the process is serving.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let voice_status = if state.deps.voice.is_some() {
        "configured"
    } else {
        "not_configured"
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            listings: state.deps.catalog.len(),
            voice: VoiceHealth {
                status: voice_status.to_string(),
            },
        }),
    )
}
