//! Radar Map backend
//!
//! Serves the static weather map and normalizes the alert feed, the
//! convective outlook service and an optional remote ML service into the
//! JSON shapes the map expects.

use std::{path::Path, sync::Arc};

use axum::Router;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub mod clock;
pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use crate::config::Config;

use crate::clock::{Clock, SystemClock};
use crate::error::AppResult;
use crate::external::{AlertClient, MlClient, OutlookClient};
use crate::services::{AlertService, MlBridge, OutlookService};

/// Page served at `/`
pub const INDEX_PAGE: &str = "RadarMap-optimized.html";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub alerts: AlertService,
    pub outlooks: OutlookService,
    pub ml: Arc<MlBridge>,
}

impl AppState {
    /// Build services from configuration using the wall clock
    pub fn from_config(config: Config) -> AppResult<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> AppResult<Self> {
        let alerts = AlertService::new(AlertClient::new(&config.alerts)?);
        let outlooks = OutlookService::new(OutlookClient::new(&config.outlooks)?);
        let ml = MlBridge::new(
            MlClient::new(config.ml.timeout())?,
            config.ml.base_url(),
            config.ml.cache_ttl(),
            clock,
        );

        Ok(Self {
            config: Arc::new(config),
            alerts,
            outlooks,
            ml: Arc::new(ml),
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = Path::new(&state.config.server.static_dir).to_path_buf();

    Router::new()
        .route_service("/", ServeFile::new(static_dir.join(INDEX_PAGE)))
        .route("/health", axum::routing::get(handlers::health_check))
        .nest("/api", routes::api_routes())
        .fallback_service(ServeDir::new(static_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
