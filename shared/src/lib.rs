//! Shared types and models for the Radar Map backend
//!
//! Wire records returned to the browser front end, and the pure
//! normalization rules used to build them from upstream payloads.

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
