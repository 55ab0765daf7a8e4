//! # Platform Messages
//!
//! The message types exchanged between a [`PlatformClient`](crate::framework::PlatformClient)
//! and a [`PlatformActor`](crate::framework::PlatformActor).

use crate::framework::entity::RemoteEntity;
use crate::framework::error::ApiError;
use std::fmt;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the platform.
pub type Response<T> = oneshot::Sender<Result<T, ApiError>>;

/// The tenant (corp) and sub-tenant (site) under which a remote object is addressed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope {
    pub corp: String,
    pub site: String,
}

impl Scope {
    pub fn new(corp: impl Into<String>, site: impl Into<String>) -> Self {
        Self {
            corp: corp.into(),
            site: site.into(),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.corp, self.site)
    }
}

/// Request sent to the platform.
///
/// # The CRUD Pattern
/// The variants map onto the four remote operations a managed object supports:
///
/// - **Create**: provisions a new object from the server-side template. Carries no payload
///   beyond the scope.
/// - **Fetch**: returns the current object by identity.
/// - **Replace**: overwrites every mutable field with [`RemoteEntity::Body`].
/// - **Delete**: destroys the object.
#[derive(Debug)]
pub enum PlatformRequest<T: RemoteEntity> {
    Create {
        scope: Scope,
        respond_to: Response<T>,
    },
    Fetch {
        scope: Scope,
        id: String,
        respond_to: Response<T>,
    },
    Replace {
        scope: Scope,
        id: String,
        body: T::Body,
        respond_to: Response<T>,
    },
    Delete {
        scope: Scope,
        id: String,
        respond_to: Response<()>,
    },
}
