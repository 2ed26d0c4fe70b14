//! Single-item generation endpoints
//!
//! One endpoint per modality. The batch endpoint dispatches through the same
//! generator trait objects, so single-item and batch results are consistent.

use crate::core::generators::{AudioGenerator, DEFAULT_SPEED, DEFAULT_VOICE};
use crate::core::types::{GenerationKind, GenerationOutput, GenerationRequest};
use crate::server::routes::errors;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::{web, HttpResponse, Result as ActixResult};
use serde_json::json;
use tracing::{error, info};

/// Image generation endpoint
///
/// Proxies to the upstream image service and returns the raw image bytes
/// with the upstream content type.
pub async fn generate_image(
    state: web::Data<AppState>,
    request: web::Json<GenerationRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    if request.prompt().is_err() {
        return Ok(errors::validation_error("prompt is required"));
    }

    info!(
        "Image generation request: model={}, {}x{}",
        request.model.as_deref().unwrap_or("flux"),
        request.width.unwrap_or(1024),
        request.height.unwrap_or(1024)
    );

    let generator = state.generators.for_kind(GenerationKind::Image);
    match generator.generate(&request).await {
        Ok(GenerationOutput::Binary(payload)) => Ok(HttpResponse::Ok()
            .content_type(payload.content_type)
            .insert_header(("x-generated-by", "pollinations-ai"))
            .body(payload.bytes)),
        Ok(GenerationOutput::Text(_)) => {
            Ok(errors::internal_error("unexpected text output from image generator"))
        }
        Err(GatewayError::Validation(message)) => Ok(errors::validation_error(&message)),
        Err(GatewayError::Upstream { status, details }) => {
            error!("Image generation upstream failure: status {}", status);
            Ok(errors::upstream_error(
                "Image generation failed",
                status,
                &details,
            ))
        }
        Err(e) => {
            error!("Image generation error: {}", e);
            Ok(errors::internal_error(&e.to_string()))
        }
    }
}

/// Audio generation endpoint (text-to-speech)
///
/// Returns raw audio bytes on success. When the TTS upstream is unavailable
/// the request is not failed outright; a deferred HTTP 202 response carries
/// the truncated text and the requested voice settings.
pub async fn generate_audio(
    state: web::Data<AppState>,
    request: web::Json<GenerationRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    let prompt = match request.prompt() {
        Ok(p) => p.to_string(),
        Err(_) => return Ok(errors::validation_error("prompt is required")),
    };

    let voice = request.voice.clone().unwrap_or_else(|| DEFAULT_VOICE.to_string());
    let speed = request.speed.unwrap_or(DEFAULT_SPEED);
    info!("Audio generation request: voice={}, speed={}, text_len={}", voice, speed, prompt.len());

    let generator = state.generators.for_kind(GenerationKind::Audio);
    match generator.generate(&request).await {
        Ok(GenerationOutput::Binary(payload)) => Ok(HttpResponse::Ok()
            .content_type(payload.content_type)
            .insert_header(("x-generated-by", "pollinations-ai"))
            .insert_header(("x-voice", voice))
            .insert_header(("x-speed", speed.to_string()))
            .body(payload.bytes)),
        Ok(GenerationOutput::Text(_)) => {
            Ok(errors::internal_error("unexpected text output from audio generator"))
        }
        Err(GatewayError::Validation(message)) => Ok(errors::validation_error(&message)),
        Err(GatewayError::AudioUnavailable(message)) => {
            info!("TTS upstream unavailable, returning deferred response");
            Ok(HttpResponse::Accepted().json(json!({
                "error": "Audio generation temporarily unavailable",
                "fallback": true,
                "text": AudioGenerator::truncate_prompt(&prompt),
                "message": message,
                "metadata": {
                    "voice": voice,
                    "speed": speed,
                    "timestamp": chrono::Utc::now().to_rfc3339()
                }
            })))
        }
        Err(e) => {
            error!("Audio generation error: {}", e);
            Ok(errors::internal_error(&e.to_string()))
        }
    }
}

/// Text generation endpoint
///
/// Template-based responder; no model inference happens here.
pub async fn generate_text(
    state: web::Data<AppState>,
    request: web::Json<GenerationRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    if request.prompt().is_err() {
        return Ok(errors::validation_error("prompt is required"));
    }

    info!(
        "Text generation request: model={}",
        request.model.as_deref().unwrap_or("enhanced-template")
    );

    let generator = state.generators.for_kind(GenerationKind::Text);
    match generator.generate(&request).await {
        Ok(GenerationOutput::Text(output)) => Ok(HttpResponse::Ok().json(output)),
        Ok(GenerationOutput::Binary(_)) => {
            Ok(errors::internal_error("unexpected binary output from text generator"))
        }
        Err(GatewayError::Validation(message)) => Ok(errors::validation_error(&message)),
        Err(e) => {
            error!("Text generation error: {}", e);
            Ok(errors::internal_error(&e.to_string()))
        }
    }
}
