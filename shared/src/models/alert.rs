//! Weather alert models

use serde::{Deserialize, Serialize};

/// Watch events forwarded to the map when pass-through is off
///
/// Matched case-insensitively against the full upstream event name.
pub const WATCH_EVENTS: &[&str] = &[
    "tornado watch",
    "severe thunderstorm watch",
    "flash flood watch",
    "hurricane watch",
    "tropical storm watch",
];

/// Check whether an upstream event name is one of the watch events
pub fn is_watch_event(event: &str) -> bool {
    let event = event.to_lowercase();
    WATCH_EVENTS.iter().any(|watch| *watch == event)
}

/// An active alert, normalized for the map
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertRecord {
    pub id: String,
    pub event: String,
    pub headline: String,
    #[serde(rename = "areaDesc")]
    pub area_desc: String,
    pub description: String,
    pub expires: String,
    /// Upstream GeoJSON geometry, passed through untouched
    pub geometry: serde_json::Value,
}

/// Body of `GET /api/weather/alerts`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertsResponse {
    pub alerts: Vec<AlertRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AlertsResponse {
    /// Empty alert list carrying the reason the feed could not be read
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            alerts: Vec::new(),
            error: Some(error.into()),
        }
    }
}
