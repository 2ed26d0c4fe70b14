//! Domain and wire types for generation requests and batch reports

use crate::utils::error::{GatewayError, Result};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Generation modality
///
/// Closed enumeration; the wire `type` field is parsed through [`FromStr`]
/// so that an unrecognized value surfaces as a per-item error instead of
/// failing the whole batch at deserialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    /// Image generation via the upstream image service
    Image,
    /// Audio (text-to-speech) generation via the upstream audio service
    Audio,
    /// Template-based text generation
    Text,
}

impl FromStr for GenerationKind {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "image" => Ok(Self::Image),
            "audio" => Ok(Self::Audio),
            "text" => Ok(Self::Text),
            other => Err(GatewayError::UnsupportedType(other.to_string())),
        }
    }
}

impl fmt::Display for GenerationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Text => "text",
        };
        write!(f, "{}", s)
    }
}

/// Options carried by a generation request
///
/// A typed record of every option any generator recognizes. Each generator
/// reads only its own subset; unknown wire keys are ignored on
/// deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Prompt text; required and non-empty for every modality
    #[serde(default)]
    pub prompt: Option<String>,
    /// Image width in pixels (image only, default 1024)
    #[serde(default)]
    pub width: Option<u32>,
    /// Image height in pixels (image only, default 1024)
    #[serde(default)]
    pub height: Option<u32>,
    /// Model name (image default `flux`, text default `enhanced-template`)
    #[serde(default)]
    pub model: Option<String>,
    /// Random seed for reproducibility (image only)
    #[serde(default)]
    pub seed: Option<i64>,
    /// Suppress the upstream watermark (image only, default on)
    #[serde(default)]
    pub nologo: Option<bool>,
    /// Voice name (audio only, default `alloy`)
    #[serde(default)]
    pub voice: Option<String>,
    /// Speech speed between 0.25 and 4.0 (audio only, default 1.0)
    #[serde(default)]
    pub speed: Option<f32>,
}

impl GenerationRequest {
    /// Get the prompt, failing if it is missing or empty
    pub fn prompt(&self) -> Result<&str> {
        match self.prompt.as_deref() {
            Some(p) if !p.trim().is_empty() => Ok(p),
            _ => Err(GatewayError::validation("prompt is required")),
        }
    }

    /// Reduce the request to the option subset a given modality recognizes
    pub fn subset_for(self, kind: GenerationKind) -> Self {
        match kind {
            GenerationKind::Image => Self {
                prompt: self.prompt,
                width: self.width,
                height: self.height,
                model: self.model,
                ..Default::default()
            },
            GenerationKind::Audio => Self {
                prompt: self.prompt,
                voice: self.voice,
                speed: self.speed,
                ..Default::default()
            },
            GenerationKind::Text => Self {
                prompt: self.prompt,
                model: self.model,
                ..Default::default()
            },
        }
    }
}

/// One unit of work within a batch
///
/// The `type` field stays a raw string here; it is parsed into a
/// [`GenerationKind`] at dispatch so the original value is available for the
/// error message.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRequestItem {
    /// Requested modality as sent on the wire
    #[serde(rename = "type")]
    pub kind: String,
    /// Prompt and options
    #[serde(flatten)]
    pub request: GenerationRequest,
}

/// Opaque binary payload returned by a generator
#[derive(Debug, Clone)]
pub struct BinaryPayload {
    /// Raw body bytes
    pub bytes: Bytes,
    /// Content type reported by the upstream service
    pub content_type: String,
}

/// Metadata attached to generated text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextMetadata {
    /// Model name echoed from the request
    pub model: String,
    /// Classifier category the prompt fell into
    pub category: String,
    /// Generation timestamp
    pub timestamp: DateTime<Utc>,
    /// Number of words in the generated text
    pub word_count: usize,
    /// Number of characters in the generated text
    pub character_count: usize,
}

/// Text generation result
#[derive(Debug, Clone, Serialize)]
pub struct TextOutput {
    /// Generated text
    pub text: String,
    /// Generation source label
    pub source: String,
    /// Generation metadata
    pub metadata: TextMetadata,
}

/// Result of a single generator invocation
#[derive(Debug, Clone)]
pub enum GenerationOutput {
    /// Binary payload (image or audio bytes)
    Binary(BinaryPayload),
    /// Text payload with metadata
    Text(TextOutput),
}

/// Normalized per-item batch result, tagged by modality
///
/// Binary payloads are base64-encoded because the aggregate report is a
/// single JSON document.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BatchResult {
    /// Image bytes, base64-encoded
    Image {
        /// Base64-encoded image data
        image_base64: String,
        /// Upstream content type
        content_type: String,
    },
    /// Audio bytes, base64-encoded
    Audio {
        /// Base64-encoded audio data
        audio_base64: String,
        /// Upstream content type
        content_type: String,
    },
    /// Generated text
    Text {
        /// Generated text, empty if the generator produced none
        text: String,
        /// Generation metadata, when available
        #[serde(skip_serializing_if = "Option::is_none")]
        metadata: Option<TextMetadata>,
    },
}

/// Outcome of processing one batch item
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BatchItemOutcome {
    /// The item was generated
    Success {
        /// Normalized generation result
        result: BatchResult,
    },
    /// The item failed; siblings are unaffected
    Error {
        /// Human-readable failure description
        error: String,
    },
}

impl BatchItemOutcome {
    /// Whether this outcome is a success
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Aggregate batch response
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Per-item outcomes, in input order
    pub results: Vec<BatchItemOutcome>,
    /// Number of items processed; always equals `results.len()`
    pub processed: usize,
    /// Timestamp of when aggregation completed
    pub timestamp: DateTime<Utc>,
}
