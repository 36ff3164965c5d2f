//! Remote ML prediction payloads

use serde::{Deserialize, Serialize};

/// Structured failure returned in place of predictions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MlFailure {
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl MlFailure {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: message.into(),
        }
    }
}

/// Body of `GET /api/ml/status`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MlStatus {
    pub configured: bool,
    pub url: String,
    pub message: String,
}
