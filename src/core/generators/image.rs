//! Image generation via the Pollinations image service
//!
//! The upstream exposes generation as a GET on
//! `/prompt/{prompt}?width=..&height=..&model=..`, returning the rendered
//! image bytes directly.

use crate::core::generators::MediaGenerator;
use crate::core::types::{BinaryPayload, GenerationOutput, GenerationRequest};
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

const DEFAULT_WIDTH: u32 = 1024;
const DEFAULT_HEIGHT: u32 = 1024;
const DEFAULT_MODEL: &str = "flux";
const DEFAULT_CONTENT_TYPE: &str = "image/png";

/// Generator calling the upstream image service
#[derive(Debug, Clone)]
pub struct ImageGenerator {
    client: reqwest::Client,
    base_url: String,
}

impl ImageGenerator {
    /// Create a new image generator
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Build the upstream request URL for a prompt and its options
    fn request_url(&self, prompt: &str, request: &GenerationRequest) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| GatewayError::Config(format!("invalid image base URL: {}", self.base_url)))?
            .push("prompt")
            .push(prompt);

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("width", &request.width.unwrap_or(DEFAULT_WIDTH).to_string());
            query.append_pair(
                "height",
                &request.height.unwrap_or(DEFAULT_HEIGHT).to_string(),
            );
            query.append_pair("model", request.model.as_deref().unwrap_or(DEFAULT_MODEL));
            query.append_pair("nologo", if request.nologo.unwrap_or(true) { "1" } else { "0" });
            if let Some(seed) = request.seed {
                query.append_pair("seed", &seed.to_string());
            }
        }

        Ok(url)
    }
}

#[async_trait]
impl MediaGenerator for ImageGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationOutput> {
        let prompt = request.prompt()?;
        let url = self.request_url(prompt, request)?;

        debug!("Dispatching image generation to {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let details = response.text().await.unwrap_or_default();
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                details,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();
        let bytes = response.bytes().await?;

        Ok(GenerationOutput::Binary(BinaryPayload {
            bytes,
            content_type,
        }))
    }
}
