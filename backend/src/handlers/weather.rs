//! HTTP handlers for alert and outlook endpoints

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use shared::{AlertsResponse, OutlookDay, OutlooksResponse};

use crate::AppState;

/// Active watches, or every alert when pass-through is configured
pub async fn get_alerts(State(state): State<AppState>) -> Json<AlertsResponse> {
    let pass_all = state.config.alerts.pass_all;
    Json(state.alerts.fetch_alerts(pass_all).await)
}

/// Query parameters for outlooks
#[derive(Debug, Deserialize)]
pub struct OutlookQuery {
    /// Kept as text so a bad value coerces to day 1 instead of a 400
    pub day: Option<String>,
}

/// Categorical outlook polygons for the requested or configured day
///
/// A query string that does not deserialize (e.g. `day` repeated) falls back
/// to the configured day rather than rejecting the request.
pub async fn get_outlooks(
    State(state): State<AppState>,
    query: Result<Query<OutlookQuery>, QueryRejection>,
) -> Json<OutlooksResponse> {
    let requested = match query {
        Ok(Query(query)) => query.day,
        Err(rejection) => {
            tracing::debug!("Ignoring outlook query: {}", rejection);
            None
        }
    };

    let day = requested
        .as_deref()
        .map(OutlookDay::parse)
        .unwrap_or_else(|| state.config.outlooks.default_day());

    Json(state.outlooks.fetch_outlooks(day).await)
}
