//! Stub generators for endpoint tests

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use polycraft_gateway::core::generators::MediaGenerator;
use polycraft_gateway::core::types::{
    BinaryPayload, GenerationOutput, GenerationRequest, TextMetadata, TextOutput,
};
use polycraft_gateway::utils::error::{GatewayError, Result};

/// Stub returning fixed binary content
pub struct StubBinary {
    /// Content type reported with the payload
    pub content_type: &'static str,
    /// Payload bytes
    pub body: &'static [u8],
}

impl StubBinary {
    /// Stub standing in for the image upstream
    pub fn image() -> Self {
        Self {
            content_type: "image/png",
            body: b"fake-png-bytes",
        }
    }

    /// Stub standing in for the audio upstream
    pub fn audio() -> Self {
        Self {
            content_type: "audio/wav",
            body: b"fake-wav-bytes",
        }
    }
}

#[async_trait]
impl MediaGenerator for StubBinary {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationOutput> {
        request.prompt()?;
        Ok(GenerationOutput::Binary(BinaryPayload {
            bytes: Bytes::from_static(self.body),
            content_type: self.content_type.to_string(),
        }))
    }
}

/// Stub returning fixed text output
pub struct StubText;

#[async_trait]
impl MediaGenerator for StubText {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationOutput> {
        let prompt = request.prompt()?;
        let text = format!("stub response about {}", prompt);
        Ok(GenerationOutput::Text(TextOutput {
            text: text.clone(),
            source: "stub".to_string(),
            metadata: TextMetadata {
                model: "stub".to_string(),
                category: "default".to_string(),
                timestamp: Utc::now(),
                word_count: text.split_whitespace().count(),
                character_count: text.chars().count(),
            },
        }))
    }
}

/// Stub simulating a network failure on every call
pub struct StubNetworkFailure;

#[async_trait]
impl MediaGenerator for StubNetworkFailure {
    async fn generate(&self, _request: &GenerationRequest) -> Result<GenerationOutput> {
        Err(GatewayError::Upstream {
            status: 503,
            details: "connection refused".to_string(),
        })
    }
}

/// Stub simulating an unavailable TTS upstream
pub struct StubDeferredAudio;

#[async_trait]
impl MediaGenerator for StubDeferredAudio {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationOutput> {
        request.prompt()?;
        Err(GatewayError::AudioUnavailable(
            "TTS upstream returned status 404".to_string(),
        ))
    }
}
