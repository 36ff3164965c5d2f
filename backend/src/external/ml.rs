//! Remote ML prediction service client

use std::time::Duration;

use reqwest::Client;

use crate::error::{AppResult, UpstreamError};

/// Path of the prediction export on the remote ML service
pub const PREDICTIONS_PATH: &str = "/api/ml/predictions-external";

/// Remote ML client
#[derive(Clone)]
pub struct MlClient {
    client: Client,
    timeout: Duration,
}

impl MlClient {
    pub fn new(timeout: Duration) -> AppResult<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            timeout,
        })
    }

    /// Fetch the prediction document from `base_url`
    pub async fn fetch_predictions(
        &self,
        base_url: &str,
    ) -> Result<serde_json::Value, UpstreamError> {
        let url = format!("{}{}", base_url, PREDICTIONS_PATH);

        let response = self
            .client
            .get(&url)
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
