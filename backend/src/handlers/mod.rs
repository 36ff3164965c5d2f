//! HTTP handlers
//!
//! Every upstream-backed endpoint answers 200 with the failure described in
//! the body.

pub mod health;
pub mod ml;
pub mod weather;

pub use health::*;
pub use ml::*;
pub use weather::*;
