// https://elevenlabs.io/docs/conversational-ai/api-reference

pub mod models;

use reqwest::{header, Client};

use crate::models::{ConversationTokenResponse, SignedUrlResponse};

const API_BASE: &str = "https://api.elevenlabs.io";

#[derive(Debug, Clone)]
pub struct ElevenLabsOptions {
    pub api_key: String,
    pub agent_id: String,
}

#[derive(Debug, Clone)]
pub struct ElevenLabsService {
    options: ElevenLabsOptions,
    client: Client,
}

impl ElevenLabsService {
    pub fn new(options: ElevenLabsOptions) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("HTTP client with static configuration should always build");

        Self { options, client }
    }

    /// Fetch a signed WebSocket URL for a conversation with the configured agent.
    ///
    /// The API key travels in the `xi-api-key` header only; the signed URL
    /// returned here is short-lived and safe to hand to a browser client.
    pub async fn get_signed_url(&self) -> Result<SignedUrlResponse, &'static str> {
        let url = format!(
            "{API_BASE}/v1/convai/conversation/get-signed-url?agent_id={agent_id}",
            agent_id = self.options.agent_id
        );

        let mut headers = header::HeaderMap::new();
        headers.insert(
            "xi-api-key",
            self.options
                .api_key
                .parse()
                .map_err(|_| "API key is not a valid header value")?,
        );

        let res = self.client.get(url).headers(headers).send().await;

        match res {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() {
                    // Log the error response from ElevenLabs
                    let error_body = response.text().await.unwrap_or_default();
                    eprintln!("ElevenLabs error ({}): {}", status, error_body);
                    return Err("ElevenLabs returned an error");
                }

                let result = response.json::<SignedUrlResponse>().await;
                match result {
                    Ok(data) => Ok(data),
                    Err(e) => {
                        eprintln!("Failed to parse ElevenLabs signed URL response: {}", e);
                        Err("No signed URL in ElevenLabs response")
                    }
                }
            }
            Err(e) => {
                eprintln!("Request to ElevenLabs failed: {}", e);
                Err("Error fetching signed URL")
            }
        }
    }

    /// Fetch a short-lived conversation token for a WebRTC connection.
    pub async fn get_conversation_token(
        &self,
    ) -> Result<ConversationTokenResponse, &'static str> {
        let url = format!(
            "{API_BASE}/v1/convai/conversation/token?agent_id={agent_id}",
            agent_id = self.options.agent_id
        );

        let mut headers = header::HeaderMap::new();
        headers.insert(
            "xi-api-key",
            self.options
                .api_key
                .parse()
                .map_err(|_| "API key is not a valid header value")?,
        );

        let res = self.client.get(url).headers(headers).send().await;

        match res {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() {
                    let error_body = response.text().await.unwrap_or_default();
                    eprintln!("ElevenLabs error ({}): {}", status, error_body);
                    return Err("ElevenLabs returned an error");
                }

                let result = response.json::<ConversationTokenResponse>().await;
                match result {
                    Ok(data) => Ok(data),
                    Err(e) => {
                        eprintln!("Failed to parse ElevenLabs token response: {}", e);
                        Err("No conversation token in ElevenLabs response")
                    }
                }
            }
            Err(e) => {
                eprintln!("Request to ElevenLabs failed: {}", e);
                Err("Error fetching conversation token")
            }
        }
    }
}
