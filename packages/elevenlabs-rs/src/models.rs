use serde::Deserialize;

/// Response from the signed-URL endpoint (websocket connections).
#[derive(Debug, Clone, Deserialize)]
pub struct SignedUrlResponse {
    pub signed_url: String,
}

/// Response from the conversation-token endpoint (WebRTC connections).
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationTokenResponse {
    pub token: String,
}
