use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// ElevenLabs API key; optional so the rest of the site runs without it
    pub elevenlabs_api_key: Option<String>,
    /// ElevenLabs conversational agent identifier
    pub elevenlabs_agent_id: Option<String>,
    /// Override for the bundled listing catalog
    pub listings_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            elevenlabs_api_key: env::var("ELEVENLABS_API_KEY").ok(),
            elevenlabs_agent_id: env::var("ELEVENLABS_AGENT_ID").ok(),
            listings_path: env::var("LISTINGS_PATH").ok(),
        })
    }
}
