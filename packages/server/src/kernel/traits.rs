// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Naming convention: Base* for trait names (e.g., BaseVoiceService)

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// Voice Trait (Infrastructure - conversational-voice credential issuance)
// =============================================================================

/// Issues short-lived credentials for the conversational-voice upstream.
///
/// The long-lived API key stays behind this trait; callers only ever see the
/// relayed token or signed URL.
#[async_trait]
pub trait BaseVoiceService: Send + Sync {
    /// Fetch a short-lived conversation token (WebRTC connections).
    async fn conversation_token(&self) -> Result<String>;

    /// Fetch a signed WebSocket URL (websocket connections).
    async fn signed_url(&self) -> Result<String>;
}
