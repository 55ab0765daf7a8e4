//! Generic plumbing for a remote platform that manages one kind of object.
//!
//! # Main Components
//!
//! - [`RemoteEntity`] - trait a remote object type implements to be served by the platform
//! - [`PlatformActor`] - in-memory platform task owning the object store
//! - [`PlatformClient`] - cheap, cloneable client for the platform
//! - [`ApiError`] - every failure the platform can report
//!
//! # Testing
//!
//! See [`mock`] for a scripted platform that records every request it receives.

pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod platform;

pub use client::PlatformClient;
pub use entity::RemoteEntity;
pub use error::ApiError;
pub use message::{PlatformRequest, Response, Scope};
pub use platform::PlatformActor;
