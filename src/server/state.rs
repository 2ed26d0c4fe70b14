//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::batch::BatchOrchestrator;
use crate::core::generators::Generators;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for cheap cloning into worker threads.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Modality generators used by both single-item and batch dispatch
    pub generators: Arc<Generators>,
    /// Batch orchestrator over the same generator set
    pub orchestrator: BatchOrchestrator,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, generators: Generators) -> Self {
        let generators = Arc::new(generators);
        Self {
            config: Arc::new(config),
            orchestrator: BatchOrchestrator::new(Arc::clone(&generators)),
            generators,
        }
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
