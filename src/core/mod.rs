//! Core generation logic
//!
//! This module contains the domain types, the modality-specific generators,
//! and the batch orchestrator that fans requests out across them.

pub mod batch;
pub mod generators;
pub mod types;

pub use batch::BatchOrchestrator;
pub use generators::{Generators, MediaGenerator};
pub use types::{
    BatchItemOutcome, BatchReport, BatchRequestItem, BatchResult, BinaryPayload, GenerationKind,
    GenerationOutput, GenerationRequest, TextMetadata, TextOutput,
};
