//! HTTP handlers for the ML bridge

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::MlStatus;

use crate::AppState;

/// Remote predictions, or `{success: false, ...}` when unavailable
pub async fn get_predictions(State(state): State<AppState>) -> Response {
    match state.ml.get_predictions().await {
        Ok(data) => Json(data).into_response(),
        Err(e) => Json(e.to_failure()).into_response(),
    }
}

pub async fn get_ml_status(State(state): State<AppState>) -> Json<MlStatus> {
    Json(state.ml.status())
}

#[derive(Serialize)]
pub struct ClearCacheResponse {
    pub cleared: bool,
}

/// Drop cached predictions so the next request goes to the remote service
pub async fn clear_ml_cache(State(state): State<AppState>) -> Json<ClearCacheResponse> {
    state.ml.clear_cache().await;
    Json(ClearCacheResponse { cleared: true })
}
