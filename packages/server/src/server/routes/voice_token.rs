//! Voice assistant token endpoint.
//!
//! POST /api/voice/token with an optional JSON body
//! `{ "connectionType": "webrtc" | "websocket" }`.
//!
//! Brokers a short-lived credential from the conversational-voice upstream
//! so the browser widget never sees the long-lived API key. Malformed or
//! absent bodies degrade to the webrtc default rather than erroring - the
//! widget treats the token fetch as best-effort.

use axum::{
    body::Bytes,
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::server::app::AppState;

/// Client-selected connection mode for the voice widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    #[default]
    Webrtc,
    Websocket,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    #[serde(default)]
    pub connection_type: ConnectionType,
}

/// Minimal relay of the upstream credential - nothing else leaves the server.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TokenResponse {
    Token { token: String },
    SignedUrl { signed_url: String },
}

#[derive(Debug, thiserror::Error)]
pub enum VoiceTokenError {
    #[error("voice service is not configured")]
    NotConfigured,
    #[error("failed to obtain voice credentials")]
    Upstream(anyhow::Error),
}

impl IntoResponse for VoiceTokenError {
    fn into_response(self) -> Response {
        // Upstream details stay server-side; clients get the generic message
        match &self {
            VoiceTokenError::NotConfigured => {
                tracing::error!("Voice token request failed: service not configured")
            }
            VoiceTokenError::Upstream(source) => {
                tracing::error!(error = %source, "Voice token request failed upstream")
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

/// Token issuing handler.
///
/// The body is read raw and parsed leniently: anything that isn't a valid
/// `TokenRequest` is treated as `{}`, which selects the webrtc default.
pub async fn voice_token_handler(
    Extension(state): Extension<AppState>,
    body: Bytes,
) -> Result<Json<TokenResponse>, VoiceTokenError> {
    let request: TokenRequest = serde_json::from_slice(&body).unwrap_or_default();

    // Fail before any upstream call when the secrets were missing at startup
    let voice = state
        .deps
        .voice
        .as_ref()
        .ok_or(VoiceTokenError::NotConfigured)?;

    let response = match request.connection_type {
        ConnectionType::Websocket => {
            let signed_url = voice
                .signed_url()
                .await
                .map_err(VoiceTokenError::Upstream)?;
            TokenResponse::SignedUrl { signed_url }
        }
        ConnectionType::Webrtc => {
            let token = voice
                .conversation_token()
                .await
                .map_err(VoiceTokenError::Upstream)?;
            TokenResponse::Token { token }
        }
    };

    Ok(Json(response))
}

/// Pre-flight short-circuit: 200 with an empty body. The CORS headers on
/// this and every other response come from the shared CorsLayer.
pub async fn voice_token_preflight() -> StatusCode {
    StatusCode::OK
}
