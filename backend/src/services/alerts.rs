//! Active alert normalization
//!
//! Filters the upstream feed down to drawable watch alerts and reshapes
//! each feature into an [`AlertRecord`].

use shared::{is_watch_event, AlertRecord, AlertsResponse};
use tracing::{error, info};

use crate::external::nws::{AlertClient, AlertFeature, AlertFeed};

/// Alert service
#[derive(Clone)]
pub struct AlertService {
    client: AlertClient,
}

impl AlertService {
    pub fn new(client: AlertClient) -> Self {
        Self { client }
    }

    /// Fetch active alerts, keeping only watches unless `pass_all` is set
    ///
    /// Never fails: an unreachable feed yields an empty list and the error text.
    pub async fn fetch_alerts(&self, pass_all: bool) -> AlertsResponse {
        match self.client.fetch_active().await {
            Ok(feed) => {
                let alerts = normalize_alerts(feed, pass_all);
                info!("Returning {} alerts (pass_all={})", alerts.len(), pass_all);
                AlertsResponse {
                    alerts,
                    error: None,
                }
            }
            Err(e) => {
                error!("Alert feed request failed: {}", e);
                AlertsResponse::failed(format!("Alert feed unavailable: {}", e))
            }
        }
    }
}

/// Convert feed features into alert records
pub fn normalize_alerts(feed: AlertFeed, pass_all: bool) -> Vec<AlertRecord> {
    feed.features
        .into_iter()
        .filter_map(|feature| to_record(feature, pass_all))
        .collect()
}

fn to_record(feature: AlertFeature, pass_all: bool) -> Option<AlertRecord> {
    let geometry = feature.geometry.filter(has_coordinates)?;
    let props = feature.properties.unwrap_or_default();

    let event = props.event.unwrap_or_default();
    if !pass_all && !is_watch_event(&event) {
        return None;
    }

    let id = feature
        .id
        .or(props.id)
        .or(props.sent)
        .unwrap_or_default();

    Some(AlertRecord {
        id,
        event,
        headline: props.headline.unwrap_or_default(),
        area_desc: props.area_desc.unwrap_or_default(),
        description: props.description.unwrap_or_default(),
        expires: props.expires.unwrap_or_default(),
        geometry,
    })
}

fn has_coordinates(geometry: &serde_json::Value) -> bool {
    geometry
        .get("coordinates")
        .is_some_and(|coordinates| !coordinates.is_null())
}
