//! Server dependencies for route handlers (using traits for testability)
//!
//! This module provides the central dependency container shared by all
//! routes. External services sit behind trait abstractions so tests can
//! inject mocks.

use anyhow::Result;
use async_trait::async_trait;
use elevenlabs::{ElevenLabsOptions, ElevenLabsService};
use std::sync::Arc;

use crate::config::Config;
use crate::domains::listings::ListingCatalog;
use crate::kernel::traits::BaseVoiceService;

// =============================================================================
// ElevenLabsService Adapter (implements BaseVoiceService trait)
// =============================================================================

/// Wrapper around ElevenLabsService that implements BaseVoiceService
pub struct ElevenLabsAdapter(pub Arc<ElevenLabsService>);

impl ElevenLabsAdapter {
    pub fn new(service: Arc<ElevenLabsService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseVoiceService for ElevenLabsAdapter {
    async fn conversation_token(&self) -> Result<String> {
        self.0
            .get_conversation_token()
            .await
            .map(|response| response.token)
            .map_err(|e| anyhow::anyhow!("{}", e))
    }

    async fn signed_url(&self) -> Result<String> {
        self.0
            .get_signed_url()
            .await
            .map(|response| response.signed_url)
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Dependencies accessible to route handlers
#[derive(Clone)]
pub struct ServerDeps {
    /// Listing catalog, immutable after startup
    pub catalog: Arc<ListingCatalog>,
    /// Voice credential issuer (None when the env secrets are missing -
    /// token requests then fail per-request without any upstream call)
    pub voice: Option<Arc<dyn BaseVoiceService>>,
}

impl ServerDeps {
    pub fn new(catalog: Arc<ListingCatalog>, voice: Option<Arc<dyn BaseVoiceService>>) -> Self {
        Self { catalog, voice }
    }

    /// Build production dependencies from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = match &config.listings_path {
            Some(path) => ListingCatalog::from_path(path)?,
            None => ListingCatalog::bundled(),
        };
        tracing::info!(listings = catalog.len(), "Listing catalog loaded");

        let voice: Option<Arc<dyn BaseVoiceService>> =
            match (&config.elevenlabs_api_key, &config.elevenlabs_agent_id) {
                (Some(api_key), Some(agent_id)) => {
                    let service = Arc::new(ElevenLabsService::new(ElevenLabsOptions {
                        api_key: api_key.clone(),
                        agent_id: agent_id.clone(),
                    }));
                    Some(Arc::new(ElevenLabsAdapter::new(service)))
                }
                _ => {
                    tracing::warn!(
                        "ELEVENLABS_API_KEY / ELEVENLABS_AGENT_ID not set; \
                         voice token requests will fail"
                    );
                    None
                }
            };

        Ok(Self::new(Arc::new(catalog), voice))
    }
}
