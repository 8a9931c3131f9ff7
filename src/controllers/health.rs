use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

/// Names of the configured providers, reported by the readiness check
#[derive(Debug, Clone)]
pub struct ProviderInfo {
    pub tts: &'static str,
    pub translation: &'static str,
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(State(providers): State<Arc<ProviderInfo>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "tts": providers.tts,
            "translation": providers.translation
        })),
    )
}
