//! Convective outlook normalization

use shared::{Geometry, OutlookDay, OutlookRecord, OutlooksResponse, RiskCode, CONVECTIVE};
use tracing::{error, info};

use crate::external::spc::{OutlookClient, OutlookFeature, OutlookFeed};

/// Outlook service
#[derive(Clone)]
pub struct OutlookService {
    client: OutlookClient,
}

impl OutlookService {
    pub fn new(client: OutlookClient) -> Self {
        Self { client }
    }

    /// Fetch the categorical outlook for `day`
    ///
    /// Never fails: an unreachable service yields an empty list and the error text.
    pub async fn fetch_outlooks(&self, day: OutlookDay) -> OutlooksResponse {
        match self.client.fetch_layer(day.layer_id()).await {
            Ok(feed) => {
                let outlooks = normalize_outlooks(feed, day);
                info!("Returning {} day {} outlook areas", outlooks.len(), day.number());
                OutlooksResponse {
                    outlooks,
                    error: None,
                }
            }
            Err(e) => {
                error!("Outlook request for day {} failed: {}", day.number(), e);
                OutlooksResponse::failed(format!("Outlook service unavailable: {}", e))
            }
        }
    }
}

/// Convert layer features into outlook records, dropping undrawable ones
pub fn normalize_outlooks(feed: OutlookFeed, day: OutlookDay) -> Vec<OutlookRecord> {
    feed.features
        .into_iter()
        .filter_map(|feature| to_record(feature, day))
        .collect()
}

fn to_record(feature: OutlookFeature, day: OutlookDay) -> Option<OutlookRecord> {
    let polygon = Geometry::from_value(feature.geometry?).outer_ring()?;
    let props = feature.properties.unwrap_or_default();
    let label = props.long_label();

    Some(OutlookRecord {
        kind: CONVECTIVE.to_string(),
        risk_level: RiskCode::from_label(label),
        probability: props.label.clone().unwrap_or_default(),
        description: label.to_string(),
        day: day.number(),
        polygon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feed(value: serde_json::Value) -> OutlookFeed {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn polygons_become_records() {
        let feed = feed(json!({
            "features": [{
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[-100.0, 35.0], [-98.0, 35.0], [-98.0, 37.0], [-100.0, 35.0]]]
                },
                "properties": {"label": "ENH", "label2": "Enhanced Risk"}
            }]
        }));

        let records = normalize_outlooks(feed, OutlookDay::Two);
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.kind, "convective");
        assert_eq!(record.risk_level, RiskCode::Enh);
        assert_eq!(record.probability, "ENH");
        assert_eq!(record.description, "Enhanced Risk");
        assert_eq!(record.day, 2);
        assert_eq!(record.polygon.len(), 4);
    }

    #[test]
    fn unusable_geometry_is_dropped() {
        let feed = feed(json!({
            "features": [
                {"geometry": {"type": "Polygon", "coordinates": [[[-100.0, 35.0], [-98.0, 35.0]]]}},
                {"geometry": {"type": "Point", "coordinates": [-100.0, 35.0]}},
                {"geometry": null},
                {"properties": {"label2": "High Risk"}},
                {
                    "geometry": {
                        "type": "MultiPolygon",
                        "coordinates": [[[[-90.0, 30.0], [-89.0, 30.0], [-89.0, 31.0]]]]
                    },
                    "properties": {"label2": "High Risk"}
                }
            ]
        }));

        let records = normalize_outlooks(feed, OutlookDay::One);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].risk_level, RiskCode::High);
    }

    #[test]
    fn mistyped_labels_are_read_as_missing() {
        let feed = feed(json!({
            "features": [
                {
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[-100.0, 35.0], [-98.0, 35.0], [-98.0, 37.0]]]
                    },
                    "properties": {"label": 4, "label2": "Moderate Risk"}
                },
                null,
                {
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[-90.0, 30.0], [-89.0, 30.0], [-89.0, 31.0]]]
                    },
                    "properties": {"label": "SLGT", "label2": {"text": "Slight Risk"}}
                }
            ]
        }));

        let records = normalize_outlooks(feed, OutlookDay::One);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].risk_level, RiskCode::Mdt);
        assert_eq!(records[0].probability, "");
        assert_eq!(records[1].description, "SLGT");
        assert_eq!(records[1].risk_level, RiskCode::Mrgl);
    }

    #[test]
    fn missing_label_defaults_to_marginal() {
        let feed = feed(json!({
            "features": [{
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[-100.0, 35.0], [-98.0, 35.0], [-98.0, 37.0]]]
                }
            }]
        }));

        let record = &normalize_outlooks(feed, OutlookDay::Three)[0];
        assert_eq!(record.risk_level, RiskCode::Mrgl);
        assert_eq!(record.description, "");
        assert_eq!(record.probability, "");
        assert_eq!(record.day, 3);
    }
}
