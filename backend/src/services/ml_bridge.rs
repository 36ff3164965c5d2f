//! Bridge to the remote ML prediction service
//!
//! The last successful response is cached for a fixed time-to-live. Failures
//! are reported to the caller but never cached, and a failed refresh leaves a
//! stale entry in place.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use shared::MlStatus;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::clock::Clock;
use crate::error::MlBridgeError;
use crate::external::MlClient;

/// A successful prediction response and when it was fetched
#[derive(Debug, Clone)]
pub struct MlCacheEntry {
    pub data: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl MlCacheEntry {
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        match (now - self.timestamp).to_std() {
            Ok(age) => age < ttl,
            // Fetched "in the future": the clock stepped back, so the age is unknown
            Err(_) => false,
        }
    }
}

/// Cached bridge to the remote ML service
///
/// The lock is never held across the upstream call, so concurrent refreshes
/// may each hit the remote service; the last write wins.
pub struct MlBridge {
    client: MlClient,
    base_url: Option<String>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
    cache: RwLock<Option<MlCacheEntry>>,
}

impl MlBridge {
    pub fn new(
        client: MlClient,
        base_url: Option<String>,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            client,
            base_url,
            ttl,
            clock,
            cache: RwLock::new(None),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    /// Return predictions from cache, or fetch and cache them
    pub async fn get_predictions(&self) -> Result<serde_json::Value, MlBridgeError> {
        if let Some(data) = self.cached().await {
            info!("Using cached ML data");
            return Ok(data);
        }

        let Some(base_url) = self.base_url.as_deref() else {
            warn!("LOCAL_ML_URL not configured");
            return Err(MlBridgeError::NotConfigured);
        };

        info!("Fetching ML data from: {}", base_url);
        match self.client.fetch_predictions(base_url).await {
            Ok(data) => {
                *self.cache.write().await = Some(MlCacheEntry {
                    data: data.clone(),
                    timestamp: self.clock.now(),
                });
                info!("Successfully fetched ML data");
                Ok(data)
            }
            Err(e) => {
                error!("Error fetching ML data: {}", e);
                Err(e.into())
            }
        }
    }

    /// Drop any cached predictions
    pub async fn clear_cache(&self) {
        *self.cache.write().await = None;
        info!("ML cache cleared");
    }

    /// Current cache entry, fresh or not
    pub async fn cache_entry(&self) -> Option<MlCacheEntry> {
        self.cache.read().await.clone()
    }

    pub fn status(&self) -> MlStatus {
        match &self.base_url {
            Some(url) => MlStatus {
                configured: true,
                url: url.clone(),
                message: "Local ML configured".to_string(),
            },
            None => MlStatus {
                configured: false,
                url: String::new(),
                message: "Set LOCAL_ML_URL environment variable".to_string(),
            },
        }
    }

    async fn cached(&self) -> Option<serde_json::Value> {
        let cache = self.cache.read().await;
        let entry = cache.as_ref()?;
        entry
            .is_fresh(self.clock.now(), self.ttl)
            .then(|| entry.data.clone())
    }
}
