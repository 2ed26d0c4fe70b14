//! Modality-specific generators
//!
//! Each generator turns a [`GenerationRequest`] into a [`GenerationOutput`].
//! Image and audio delegate to the Pollinations upstream over HTTP; text is
//! served locally from templates. The single-item routes and the batch
//! orchestrator share the same trait objects, so both paths get identical
//! dispatch semantics.

mod audio;
mod image;
mod text;

pub use audio::{AudioGenerator, DEFAULT_SPEED, DEFAULT_VOICE, MAX_SPEECH_CHARS};
pub use image::ImageGenerator;
pub use text::{TextGenerator, TEXT_SOURCE};

use crate::config::UpstreamConfig;
use crate::core::types::{GenerationKind, GenerationOutput, GenerationRequest};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// A generator for one modality
#[async_trait]
pub trait MediaGenerator: Send + Sync {
    /// Generate content for the given request
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationOutput>;
}

/// The set of generators the gateway dispatches to
#[derive(Clone)]
pub struct Generators {
    image: Arc<dyn MediaGenerator>,
    audio: Arc<dyn MediaGenerator>,
    text: Arc<dyn MediaGenerator>,
}

impl Generators {
    /// Build the production generator set from upstream configuration
    ///
    /// A single reqwest client is shared by the HTTP-backed generators; it is
    /// safe for concurrent use should dispatch ever become parallel.
    pub fn from_config(upstream: &UpstreamConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(upstream.user_agent.clone())
            .timeout(Duration::from_secs(upstream.timeout_secs))
            .build()?;

        Ok(Self {
            image: Arc::new(ImageGenerator::new(
                client.clone(),
                upstream.image_base_url.clone(),
            )),
            audio: Arc::new(AudioGenerator::new(
                client,
                upstream.audio_base_url.clone(),
            )),
            text: Arc::new(TextGenerator::new()),
        })
    }

    /// Assemble a generator set from arbitrary implementations
    pub fn new(
        image: Arc<dyn MediaGenerator>,
        audio: Arc<dyn MediaGenerator>,
        text: Arc<dyn MediaGenerator>,
    ) -> Self {
        Self { image, audio, text }
    }

    /// Select the generator for a modality
    pub fn for_kind(&self, kind: GenerationKind) -> &dyn MediaGenerator {
        match kind {
            GenerationKind::Image => self.image.as_ref(),
            GenerationKind::Audio => self.audio.as_ref(),
            GenerationKind::Text => self.text.as_ref(),
        }
    }
}
