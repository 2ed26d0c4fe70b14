//! Batch orchestration
//!
//! Fans a heterogeneous list of generation requests out across the three
//! generators, one item at a time and in input order. A failing item is
//! captured as an error outcome and never short-circuits its siblings; only
//! a malformed batch body (handled in the route layer) aborts the call.

use crate::core::generators::Generators;
use crate::core::types::{
    BatchItemOutcome, BatchReport, BatchRequestItem, BatchResult, GenerationKind, GenerationOutput,
};
use crate::utils::error::Result;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Orchestrates a batch of generation requests
#[derive(Clone)]
pub struct BatchOrchestrator {
    generators: Arc<Generators>,
}

impl BatchOrchestrator {
    /// Create a new orchestrator over a generator set
    pub fn new(generators: Arc<Generators>) -> Self {
        Self { generators }
    }

    /// Process every item in order and assemble the aggregate report
    ///
    /// Infallible by design: per-item failures become error outcomes, and the
    /// report always contains exactly one outcome per input item.
    pub async fn run(&self, items: &[Value]) -> BatchReport {
        debug!("Processing batch of {} items", items.len());

        let mut results = Vec::with_capacity(items.len());
        for item in items {
            let outcome = match self.process_item(item).await {
                Ok(result) => BatchItemOutcome::Success { result },
                Err(e) => {
                    warn!("Batch item failed: {}", e);
                    BatchItemOutcome::Error {
                        error: e.to_string(),
                    }
                }
            };
            results.push(outcome);
        }

        BatchReport {
            processed: results.len(),
            results,
            timestamp: Utc::now(),
        }
    }

    /// Dispatch one item to its generator and normalize the response
    async fn process_item(&self, raw: &Value) -> Result<BatchResult> {
        let item: BatchRequestItem = serde_json::from_value(raw.clone())?;
        let kind: GenerationKind = item.kind.parse()?;

        let request = item.request.subset_for(kind);
        let output = self.generators.for_kind(kind).generate(&request).await?;

        Ok(normalize(kind, output))
    }
}

/// Normalize a generator output into the batch wire shape
///
/// Binary payloads are base64-encoded because the aggregate report is a
/// single JSON document.
fn normalize(kind: GenerationKind, output: GenerationOutput) -> BatchResult {
    match output {
        GenerationOutput::Binary(payload) => {
            let encoded = BASE64.encode(&payload.bytes);
            match kind {
                GenerationKind::Audio => BatchResult::Audio {
                    audio_base64: encoded,
                    content_type: payload.content_type,
                },
                _ => BatchResult::Image {
                    image_base64: encoded,
                    content_type: payload.content_type,
                },
            }
        }
        GenerationOutput::Text(text) => BatchResult::Text {
            text: text.text,
            metadata: Some(text.metadata),
        },
    }
}
