//! Configuration data models
//!
//! Serde-backed structs for the gateway configuration file, with defaults
//! matching the hosted Pollinations endpoints.

use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Top-level gateway configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream generation service configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables, starting from defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(host) = env::var("GATEWAY_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = env::var("GATEWAY_PORT") {
            config.server.port = port
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid port: {}", e)))?;
        }
        if let Ok(workers) = env::var("GATEWAY_WORKERS") {
            config.server.workers = Some(
                workers
                    .parse()
                    .map_err(|e| GatewayError::Config(format!("Invalid workers count: {}", e)))?,
            );
        }
        if let Ok(url) = env::var("UPSTREAM_IMAGE_URL") {
            config.upstream.image_base_url = url;
        }
        if let Ok(url) = env::var("UPSTREAM_AUDIO_URL") {
            config.upstream.audio_base_url = url;
        }
        if let Ok(timeout) = env::var("UPSTREAM_TIMEOUT_SECS") {
            config.upstream.timeout_secs = timeout
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid timeout: {}", e)))?;
        }

        Ok(config)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of worker threads (defaults to the actix default)
    #[serde(default)]
    pub workers: Option<usize>,
    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Validate server settings
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(GatewayError::Config("host must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(GatewayError::Config("port must be non-zero".to_string()));
        }
        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err(GatewayError::Config(
                    "workers must be greater than 0".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Whether CORS headers are emitted
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Allowed origins; `*` allows any origin
    #[serde(default = "default_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: default_origins(),
        }
    }
}

impl CorsConfig {
    /// Whether the configuration allows any origin
    pub fn allows_all_origins(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

/// Upstream generation service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the image generation service
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    /// Base URL of the audio (TTS) generation service
    #[serde(default = "default_audio_base_url")]
    pub audio_base_url: String,
    /// User-Agent header sent on upstream requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Upstream request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            image_base_url: default_image_base_url(),
            audio_base_url: default_audio_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl UpstreamConfig {
    /// Validate upstream settings
    pub fn validate(&self) -> Result<()> {
        if self.image_base_url.is_empty() {
            return Err(GatewayError::Config(
                "image_base_url must not be empty".to_string(),
            ));
        }
        if self.audio_base_url.is_empty() {
            return Err(GatewayError::Config(
                "audio_base_url must not be empty".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(GatewayError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_true() -> bool {
    true
}

fn default_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_image_base_url() -> String {
    "https://image.pollinations.ai".to_string()
}

fn default_audio_base_url() -> String {
    "https://audio.pollinations.ai".to_string()
}

fn default_user_agent() -> String {
    "PolyCraft/1.0".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}
