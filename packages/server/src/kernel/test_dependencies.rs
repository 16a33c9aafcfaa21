// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::BaseVoiceService;

// =============================================================================
// Mock Voice Service
// =============================================================================

/// Which credential a caller asked for, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceCall {
    ConversationToken,
    SignedUrl,
}

pub struct MockVoiceService {
    token_responses: Arc<Mutex<Vec<Result<String>>>>,
    signed_url_responses: Arc<Mutex<Vec<Result<String>>>>,
    calls: Arc<Mutex<Vec<VoiceCall>>>,
}

impl MockVoiceService {
    pub fn new() -> Self {
        Self {
            token_responses: Arc::new(Mutex::new(Vec::new())),
            signed_url_responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_token(self, token: &str) -> Self {
        self.token_responses
            .lock()
            .unwrap()
            .push(Ok(token.to_string()));
        self
    }

    pub fn with_signed_url(self, url: &str) -> Self {
        self.signed_url_responses
            .lock()
            .unwrap()
            .push(Ok(url.to_string()));
        self
    }

    pub fn with_token_error(self, message: &str) -> Self {
        self.token_responses
            .lock()
            .unwrap()
            .push(Err(anyhow::anyhow!("{}", message)));
        self
    }

    pub fn with_signed_url_error(self, message: &str) -> Self {
        self.signed_url_responses
            .lock()
            .unwrap()
            .push(Err(anyhow::anyhow!("{}", message)));
        self
    }

    /// Calls recorded so far, in order.
    pub fn calls(&self) -> Vec<VoiceCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockVoiceService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseVoiceService for MockVoiceService {
    async fn conversation_token(&self) -> Result<String> {
        self.calls.lock().unwrap().push(VoiceCall::ConversationToken);
        let mut responses = self.token_responses.lock().unwrap();
        if responses.is_empty() {
            return Err(anyhow::anyhow!("MockVoiceService: no token response queued"));
        }
        responses.remove(0)
    }

    async fn signed_url(&self) -> Result<String> {
        self.calls.lock().unwrap().push(VoiceCall::SignedUrl);
        let mut responses = self.signed_url_responses.lock().unwrap();
        if responses.is_empty() {
            return Err(anyhow::anyhow!(
                "MockVoiceService: no signed URL response queued"
            ));
        }
        responses.remove(0)
    }
}
