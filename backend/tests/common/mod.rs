//! Helpers shared by the integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, Utc};
use radar_map_backend::clock::Clock;
use radar_map_backend::config::{AlertsConfig, Config, MlConfig, OutlooksConfig, ServerConfig};
use serde_json::{json, Value};

pub const USER_AGENT: &str = "radar-map-tests (tests@example.com)";

/// Configuration pointing every upstream at the given base URLs
pub fn test_config(alerts_url: &str, outlooks_url: &str, ml_url: &str) -> Config {
    Config {
        environment: "test".to_string(),
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
            static_dir: "static".to_string(),
        },
        alerts: AlertsConfig {
            base_url: alerts_url.to_string(),
            user_agent: USER_AGENT.to_string(),
            pass_all: false,
            timeout_secs: 1,
        },
        outlooks: OutlooksConfig {
            base_url: outlooks_url.to_string(),
            day: 1,
            timeout_secs: 1,
        },
        ml: MlConfig {
            url: ml_url.to_string(),
            timeout_secs: 1,
            cache_ttl_secs: 300,
        },
    }
}

pub fn polygon() -> Value {
    json!({
        "type": "Polygon",
        "coordinates": [[[-98.0, 35.0], [-97.0, 35.0], [-97.0, 36.0], [-98.0, 35.0]]]
    })
}

pub fn alert_feature(id: &str, event: &str) -> Value {
    json!({
        "id": id,
        "type": "Feature",
        "geometry": polygon(),
        "properties": {
            "id": id,
            "event": event,
            "headline": format!("{} issued", event),
            "areaDesc": "Cleveland, OK; McClain, OK",
            "description": "Conditions are favorable.",
            "expires": "2024-05-06T23:00:00-05:00",
            "sent": "2024-05-06T15:00:00-05:00"
        }
    })
}

pub fn feature_collection(features: Vec<Value>) -> Value {
    json!({ "type": "FeatureCollection", "features": features })
}

/// Base URL of a local port with nothing listening on it
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    millis: AtomicI64,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            millis: AtomicI64::new(start.timestamp_millis()),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.millis.fetch_add(by.num_milliseconds(), Ordering::SeqCst);
    }

    /// Move the clock backwards, as an NTP correction would
    pub fn rewind(&self, by: Duration) {
        self.millis.fetch_sub(by.num_milliseconds(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.millis.load(Ordering::SeqCst)).unwrap()
    }
}
