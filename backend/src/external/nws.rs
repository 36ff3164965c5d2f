//! Active alert feed client
//!
//! Reads `/alerts/active` from the National Weather Service API. The feed
//! is GeoJSON and requires a descriptive `User-Agent`.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::AlertsConfig;
use crate::error::{AppResult, UpstreamError};
use crate::external::{lenient, lenient_vec};

/// Alert feed client
#[derive(Clone)]
pub struct AlertClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

/// Feature collection returned by the feed
///
/// Fields of the wrong type are read as missing, so one odd feature never
/// fails the whole feed.
#[derive(Debug, Deserialize)]
pub struct AlertFeed {
    #[serde(default, deserialize_with = "lenient_vec")]
    pub features: Vec<AlertFeature>,
}

#[derive(Debug, Deserialize)]
pub struct AlertFeature {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default)]
    pub geometry: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub properties: Option<AlertProperties>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AlertProperties {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub sent: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub event: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub headline: Option<String>,
    #[serde(rename = "areaDesc", default, deserialize_with = "lenient")]
    pub area_desc: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub expires: Option<String>,
}

impl AlertClient {
    /// Create a new AlertClient from configuration
    pub fn new(config: &AlertsConfig) -> AppResult<Self> {
        Self::with_base_url(&config.base_url, &config.user_agent, config.timeout())
    }

    /// Create a new AlertClient with custom base URL (for testing)
    pub fn with_base_url(base_url: &str, user_agent: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Fetch every currently active alert
    pub async fn fetch_active(&self) -> Result<AlertFeed, UpstreamError> {
        let url = format!("{}/alerts/active", self.base_url);
        debug!("Fetching active alerts: {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/geo+json")
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let feed: AlertFeed = response.json().await?;
        debug!("Alert feed returned {} features", feed.features.len());

        Ok(feed)
    }
}
