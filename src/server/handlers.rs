//! HTTP route handlers
//!
//! This module provides standalone handler functions.

use actix_web::HttpResponse;
use serde_json::json;

/// Health check endpoint handler
///
/// Reports liveness only; upstream generation services are not probed, so a
/// healthy gateway can still return per-item errors from a batch.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
