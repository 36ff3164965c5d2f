//! Error handling for the Radar Map backend
//!
//! Upstream failures never reach the client as an HTTP error. Each upstream
//! call returns an [`UpstreamError`] and the service that made the call folds
//! it into a well-formed response body.

use shared::MlFailure;
use thiserror::Error;

/// Failure talking to a third-party service
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("upstream returned {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Decode(String),

    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout
        } else if err.is_connect() {
            UpstreamError::Connect(err.to_string())
        } else if err.is_decode() {
            UpstreamError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            UpstreamError::Status(status.as_u16())
        } else {
            UpstreamError::Other(err.to_string())
        }
    }
}

/// Why the ML bridge could not produce predictions
#[derive(Error, Debug)]
pub enum MlBridgeError {
    #[error("Local ML not configured")]
    NotConfigured,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl MlBridgeError {
    /// Payload sent to the browser in place of predictions
    pub fn to_failure(&self) -> MlFailure {
        match self {
            MlBridgeError::NotConfigured => MlFailure::new(
                "Local ML not configured",
                "Set LOCAL_ML_URL environment variable",
            ),
            MlBridgeError::Upstream(UpstreamError::Status(status)) => MlFailure::new(
                format!("Local ML returned {}", status),
                "Check if your PC weather system is running",
            ),
            MlBridgeError::Upstream(UpstreamError::Timeout) => {
                MlFailure::new("Connection timeout", "Local ML did not respond in time")
            }
            MlBridgeError::Upstream(UpstreamError::Connect(_)) => MlFailure::new(
                "Connection failed",
                "Cannot reach local ML - is ngrok running?",
            ),
            MlBridgeError::Upstream(other) => {
                MlFailure::new(other.to_string(), "Unexpected error fetching ML data")
            }
        }
    }
}

/// Startup errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Result type alias for startup code
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_failure() {
        let failure = MlBridgeError::NotConfigured.to_failure();
        assert!(!failure.success);
        assert_eq!(failure.error, "Local ML not configured");
    }

    #[test]
    fn status_failure_names_the_status() {
        let failure = MlBridgeError::Upstream(UpstreamError::Status(503)).to_failure();
        assert_eq!(failure.error, "Local ML returned 503");
        assert_eq!(failure.message, "Check if your PC weather system is running");
    }

    #[test]
    fn transport_failures() {
        assert_eq!(
            MlBridgeError::Upstream(UpstreamError::Timeout).to_failure().error,
            "Connection timeout"
        );
        assert_eq!(
            MlBridgeError::Upstream(UpstreamError::Connect("refused".into()))
                .to_failure()
                .error,
            "Connection failed"
        );
    }

    #[test]
    fn anything_else_is_unexpected() {
        let failure =
            MlBridgeError::Upstream(UpstreamError::Decode("expected value".into())).to_failure();
        assert_eq!(failure.error, "malformed response body: expected value");
        assert_eq!(failure.message, "Unexpected error fetching ML data");
    }
}
