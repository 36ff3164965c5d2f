//! Health check and placeholder handlers

use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint handler
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Connectivity probe used by the map page
pub async fn api_test() -> Json<Value> {
    Json(json!({ "ok": true }))
}

// TODO: serve verified forecast history once forecasts are recorded somewhere
pub async fn learning_history() -> Json<Value> {
    Json(json!({ "count": 0, "history": [] }))
}
