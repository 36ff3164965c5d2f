//! Domain models for the Radar Map backend

pub mod alert;
pub mod ml;
pub mod outlook;

pub use alert::*;
pub use ml::*;
pub use outlook::*;
