//! # RemoteEntity Trait
//!
//! The `RemoteEntity` trait is the contract a remote object type implements so the generic
//! [`PlatformActor`](crate::framework::PlatformActor) can provision, store and replace it.
//!
//! # Architecture Note
//! The platform loop (channels, store, identity generation, logging) is written *once*.
//! Each object type only describes how it is born from a template and how a replacement
//! payload is validated and applied.

use crate::framework::error::ApiError;
use crate::framework::message::Scope;
use std::fmt::Debug;

/// Trait that any remote object type must implement to be served by `PlatformActor`.
pub trait RemoteEntity: Clone + Debug + Send + Sync + 'static {
    /// The full-replacement payload accepted by `replace`.
    type Body: Clone + Debug + PartialEq + Send + Sync;

    /// Builds the object a template provisions, with server-side defaults.
    fn from_template(id: String, scope: &Scope) -> Self;

    /// The authoritative identity of this object.
    fn id(&self) -> &str;

    /// Validates and applies a full replacement.
    ///
    /// Called on a copy of the stored object; the copy is committed only on `Ok`.
    fn apply(&mut self, body: Self::Body) -> Result<(), ApiError>;
}
