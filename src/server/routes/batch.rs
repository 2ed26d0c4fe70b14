//! Batch generation endpoint
//!
//! Accepts `{ "requests": [...] }`, runs the orchestrator, and always
//! answers HTTP 200 with a full report once the body is structurally valid.
//! Only a malformed body (not JSON, or `requests` missing / not an array)
//! fails the whole call.

use crate::server::routes::errors;
use crate::server::state::AppState;
use actix_web::{web, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::info;

/// Batch generation endpoint
pub async fn batch_generate(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> ActixResult<HttpResponse> {
    // Structural validation happens on the raw body so the error shapes stay
    // under the gateway's control rather than the framework's.
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            return Ok(errors::validation_error(&format!("invalid JSON body: {}", e)));
        }
    };

    let items = match payload.get("requests").and_then(Value::as_array) {
        Some(items) => items,
        None => {
            return Ok(errors::validation_error("requests must be an array"));
        }
    };

    info!("Batch request with {} items", items.len());
    let report = state.orchestrator.run(items).await;

    Ok(HttpResponse::Ok()
        .insert_header(("cache-control", "no-store"))
        .json(report))
}
