//! Business logic services for the Radar Map backend

pub mod alerts;
pub mod ml_bridge;
pub mod outlooks;

pub use alerts::AlertService;
pub use ml_bridge::{MlBridge, MlCacheEntry};
pub use outlooks::OutlookService;
