//! Configuration management for the Radar Map backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with RADAR_ prefix
//! 4. The deployment variables `PORT`, `LOCAL_ML_URL`, `ALERTS_PASS_ALL`
//!    and `OUTLOOK_DAY`

use std::time::Duration;

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::OutlookDay;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Active alert feed
    pub alerts: AlertsConfig,

    /// Convective outlook map service
    pub outlooks: OutlooksConfig,

    /// Remote ML prediction bridge
    pub ml: MlConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,

    /// Directory holding the map page and its assets
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AlertsConfig {
    /// Base URL of the alert API
    pub base_url: String,

    /// Client identifier sent with every request; the feed rejects anonymous clients
    pub user_agent: String,

    /// Forward every alert instead of watches only
    pub pass_all: bool,

    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutlooksConfig {
    /// Base URL of the outlook MapServer, without the layer id
    pub base_url: String,

    /// Default outlook day (1, 2 or 3)
    pub day: i64,

    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MlConfig {
    /// Base URL of the remote ML service; empty when not configured
    pub url: String,

    pub timeout_secs: u64,

    /// Seconds a successful prediction response stays fresh
    pub cache_ttl_secs: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("RADAR_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 8000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.static_dir", "static")?
            .set_default("alerts.base_url", "https://api.weather.gov")?
            .set_default(
                "alerts.user_agent",
                "radar-map/0.1 (severe weather map; contact@example.com)",
            )?
            .set_default("alerts.pass_all", false)?
            .set_default("alerts.timeout_secs", 12)?
            .set_default(
                "outlooks.base_url",
                "https://mapservices.weather.noaa.gov/vector/rest/services/outlooks/SPC_wx_outlks/MapServer",
            )?
            .set_default("outlooks.day", 1)?
            .set_default("outlooks.timeout_secs", 12)?
            .set_default("ml.url", "")?
            .set_default("ml.timeout_secs", 10)?
            .set_default("ml.cache_ttl_secs", 300)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (RADAR_ prefix)
            .add_source(
                Environment::with_prefix("RADAR")
                    .separator("__")
                    .try_parsing(true),
            )
            // Deployment platform variables win over everything else
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("ml.url", std::env::var("LOCAL_ML_URL").ok())?
            .set_override_option("alerts.pass_all", std::env::var("ALERTS_PASS_ALL").ok())?
            .set_override_option(
                "outlooks.day",
                std::env::var("OUTLOOK_DAY")
                    .ok()
                    .map(|raw| i64::from(OutlookDay::parse(&raw).number())),
            )?
            .build()?;

        config.try_deserialize()
    }
}

impl AlertsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl OutlooksConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Configured default day, coerced into range
    pub fn default_day(&self) -> OutlookDay {
        OutlookDay::from_number(self.day)
    }
}

impl MlConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Configured base URL, or `None` when blank
    pub fn base_url(&self) -> Option<String> {
        let url = self.url.trim().trim_end_matches('/');
        (!url.is_empty()).then(|| url.to_string())
    }
}
