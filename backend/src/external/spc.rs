//! Convective outlook map service client
//!
//! Queries the categorical outlook layers of the SPC outlook MapServer
//! as GeoJSON with full geometry.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::OutlooksConfig;
use crate::error::{AppResult, UpstreamError};
use crate::external::{lenient, lenient_vec};

/// Outlook map service client
#[derive(Clone)]
pub struct OutlookClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
pub struct OutlookFeed {
    #[serde(default, deserialize_with = "lenient_vec")]
    pub features: Vec<OutlookFeature>,
}

#[derive(Debug, Deserialize)]
pub struct OutlookFeature {
    #[serde(default)]
    pub geometry: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub properties: Option<OutlookProperties>,
}

/// Layer attributes; only the labels are used
#[derive(Debug, Default, Deserialize)]
pub struct OutlookProperties {
    /// Short category code, e.g. `SLGT`
    #[serde(default, deserialize_with = "lenient")]
    pub label: Option<String>,
    /// Long category name, e.g. `Slight Risk`
    #[serde(default, deserialize_with = "lenient")]
    pub label2: Option<String>,
}

impl OutlookProperties {
    /// Free-text label used for risk mapping
    pub fn long_label(&self) -> &str {
        self.label2
            .as_deref()
            .or(self.label.as_deref())
            .unwrap_or_default()
    }
}

impl OutlookClient {
    pub fn new(config: &OutlooksConfig) -> AppResult<Self> {
        Self::with_base_url(&config.base_url, config.timeout())
    }

    /// Create a new OutlookClient with custom base URL (for testing)
    pub fn with_base_url(base_url: &str, timeout: Duration) -> AppResult<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Fetch all features of one layer
    pub async fn fetch_layer(&self, layer_id: u32) -> Result<OutlookFeed, UpstreamError> {
        let url = format!("{}/{}/query", self.base_url, layer_id);
        debug!("Fetching outlook layer {}: {}", layer_id, url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("where", "1=1"),
                ("outFields", "*"),
                ("returnGeometry", "true"),
                ("f", "geojson"),
            ])
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}
