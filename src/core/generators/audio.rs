//! Audio (text-to-speech) generation via the Pollinations audio service
//!
//! The upstream TTS endpoint is not always available. Any upstream failure
//! is reported as [`GatewayError::AudioUnavailable`], which the single-item
//! route renders as a deferred HTTP 202 response and the batch orchestrator
//! records as a per-item error outcome.

use crate::core::generators::MediaGenerator;
use crate::core::types::{BinaryPayload, GenerationOutput, GenerationRequest};
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

/// Longest prompt forwarded to the TTS upstream
pub const MAX_SPEECH_CHARS: usize = 500;

/// Default voice name
pub const DEFAULT_VOICE: &str = "alloy";
/// Default speech speed
pub const DEFAULT_SPEED: f32 = 1.0;

const DEFAULT_CONTENT_TYPE: &str = "audio/wav";

/// Generator calling the upstream audio service
#[derive(Debug, Clone)]
pub struct AudioGenerator {
    client: reqwest::Client,
    base_url: String,
}

impl AudioGenerator {
    /// Create a new audio generator
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Truncate a prompt to the TTS length limit on a char boundary
    pub fn truncate_prompt(prompt: &str) -> String {
        prompt.chars().take(MAX_SPEECH_CHARS).collect()
    }

    fn request_url(&self, text: &str, request: &GenerationRequest) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| GatewayError::Config(format!("invalid audio base URL: {}", self.base_url)))?
            .push("prompt")
            .push(text);

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("voice", request.voice.as_deref().unwrap_or(DEFAULT_VOICE));
            query.append_pair(
                "speed",
                &request.speed.unwrap_or(DEFAULT_SPEED).to_string(),
            );
        }

        Ok(url)
    }
}

#[async_trait]
impl MediaGenerator for AudioGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationOutput> {
        let prompt = request.prompt()?;
        let text = Self::truncate_prompt(prompt);
        let url = self.request_url(&text, request)?;

        debug!("Dispatching audio generation to {}", url);
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                return Err(GatewayError::AudioUnavailable(format!(
                    "TTS request failed: {}",
                    e
                )));
            }
        };

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::AudioUnavailable(format!(
                "TTS upstream returned status {}",
                status.as_u16()
            )));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::AudioUnavailable(format!("TTS body read failed: {}", e)))?;

        Ok(GenerationOutput::Binary(BinaryPayload {
            bytes,
            content_type,
        }))
    }
}
