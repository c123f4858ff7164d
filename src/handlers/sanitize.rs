// src/handlers/sanitize.rs

use axum::{Json, response::IntoResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::sanitizer;

/// Accepts any JSON for `html`; only strings produce output.
#[derive(Debug, Deserialize)]
pub struct SanitizeRequest {
    #[serde(default)]
    pub html: Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SanitizeResponse {
    pub html: String,
}

/// Runs a rich-text fragment through the allow-list sanitizer.
/// Used by the editor preview before markup is injected into the page.
pub async fn sanitize_html(Json(payload): Json<SanitizeRequest>) -> impl IntoResponse {
    let html = sanitizer::sanitize_value(&payload.html);
    tracing::debug!(bytes = html.len(), "sanitized fragment");
    Json(SanitizeResponse { html })
}
