//! Route definitions for the Radar Map backend

use axum::{
    routing::{delete, get},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/test", get(handlers::api_test))
        .route("/weather/alerts", get(handlers::get_alerts))
        .route("/outlooks", get(handlers::get_outlooks))
        .route("/learning/history", get(handlers::learning_history))
        .nest("/ml", ml_routes())
}

/// ML bridge routes
fn ml_routes() -> Router<AppState> {
    Router::new()
        .route("/predictions", get(handlers::get_predictions))
        .route("/status", get(handlers::get_ml_status))
        // Administrative
        .route("/cache", delete(handlers::clear_ml_cache))
}
