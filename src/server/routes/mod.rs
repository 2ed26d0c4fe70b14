//! HTTP route modules
//!
//! Route handlers organized by functionality, plus the shared error-response
//! helpers that produce the gateway's wire shapes.

pub mod batch;
pub mod generate;

use actix_web::web;

/// Configure all API routes under `/api`
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/generate/image", web::post().to(generate::generate_image))
            .route("/generate/audio", web::post().to(generate::generate_audio))
            .route("/generate/text", web::post().to(generate::generate_text))
            .route("/batch", web::post().to(batch::batch_generate)),
    );
}

/// Error response helpers
pub mod errors {
    use actix_web::HttpResponse;
    use serde_json::json;

    /// Create a validation error response (HTTP 400)
    pub fn validation_error(message: &str) -> HttpResponse {
        HttpResponse::BadRequest().json(json!({ "error": message }))
    }

    /// Create an upstream failure response (HTTP 502)
    pub fn upstream_error(message: &str, status: u16, details: &str) -> HttpResponse {
        HttpResponse::BadGateway().json(json!({
            "error": message,
            "status": status,
            "details": details
        }))
    }

    /// Create an internal server error response (HTTP 500)
    pub fn internal_error(message: &str) -> HttpResponse {
        HttpResponse::InternalServerError().json(json!({
            "error": "Internal server error",
            "message": message
        }))
    }
}
