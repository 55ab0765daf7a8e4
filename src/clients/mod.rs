//! The remote API contract and its platform-backed implementation.

pub mod alert_client;
pub mod rule_api;

pub use alert_client::*;
pub use rule_api::*;
