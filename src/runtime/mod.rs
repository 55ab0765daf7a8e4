//! Runtime wiring: configuration, tracing setup and the provider orchestrator.
//!
//! # Main Components
//!
//! - [`ProviderConfig`] - settings loaded from the environment
//! - [`ProviderSystem`] - starts the platform and wires the reconciler to it
//! - [`setup_tracing`] - initializes structured logging

pub mod config;
pub mod provider_system;
pub mod tracing;

pub use config::*;
pub use provider_system::*;
pub use tracing::*;
