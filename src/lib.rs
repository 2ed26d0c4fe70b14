//! # PolyCraft Gateway
//!
//! A multi-modal generation gateway. Image and audio requests are forwarded
//! to the Pollinations upstream; text is served by a template responder. The
//! batch endpoint fans a heterogeneous request list out across all three
//! with per-item failure isolation.
//!
//! ## Gateway mode
//!
//! ```rust,no_run
//! use polycraft_gateway::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/gateway.yaml").await?;
//!     let gateway = Gateway::new(config)?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use crate::config::Config;
pub use crate::utils::error::{GatewayError, Result};

pub use crate::core::batch::BatchOrchestrator;
pub use crate::core::generators::{
    AudioGenerator, Generators, ImageGenerator, MediaGenerator, TextGenerator,
};
pub use crate::core::types::{
    BatchItemOutcome, BatchReport, BatchRequestItem, BatchResult, GenerationKind,
    GenerationOutput, GenerationRequest,
};

use tracing::info;

/// A minimal gateway facade bundling configuration and the HTTP server
pub struct Gateway {
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");

        let server = server::HttpServer::new(&config)?;
        Ok(Self { server })
    }

    /// Run the gateway until the server stops
    pub async fn run(self) -> Result<()> {
        self.server.start().await
    }
}
