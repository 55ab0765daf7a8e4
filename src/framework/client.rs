//! # Platform Client
//!
//! The generic, channel-backed client for a [`PlatformActor`](crate::framework::PlatformActor).

use crate::framework::entity::RemoteEntity;
use crate::framework::error::ApiError;
use crate::framework::message::{PlatformRequest, Scope};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for the platform.
///
/// Holds only a sender, so cloning is cheap and clones can be shared across tasks.
#[derive(Clone)]
pub struct PlatformClient<T: RemoteEntity> {
    sender: mpsc::Sender<PlatformRequest<T>>,
}

impl<T: RemoteEntity> PlatformClient<T> {
    pub fn new(sender: mpsc::Sender<PlatformRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, scope: Scope) -> Result<T, ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(PlatformRequest::Create { scope, respond_to })
            .await
            .map_err(|_| ApiError::PlatformClosed)?;
        response.await.map_err(|_| ApiError::PlatformDropped)?
    }

    pub async fn fetch(&self, scope: Scope, id: String) -> Result<T, ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(PlatformRequest::Fetch {
                scope,
                id,
                respond_to,
            })
            .await
            .map_err(|_| ApiError::PlatformClosed)?;
        response.await.map_err(|_| ApiError::PlatformDropped)?
    }

    pub async fn replace(&self, scope: Scope, id: String, body: T::Body) -> Result<T, ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(PlatformRequest::Replace {
                scope,
                id,
                body,
                respond_to,
            })
            .await
            .map_err(|_| ApiError::PlatformClosed)?;
        response.await.map_err(|_| ApiError::PlatformDropped)?
    }

    pub async fn delete(&self, scope: Scope, id: String) -> Result<(), ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(PlatformRequest::Delete {
                scope,
                id,
                respond_to,
            })
            .await
            .map_err(|_| ApiError::PlatformClosed)?;
        response.await.map_err(|_| ApiError::PlatformDropped)?
    }
}
