//! # In-Memory Platform
//!
//! This module defines the `PlatformActor`, the server half of the remote platform. It owns
//! every provisioned object, generates identities and answers requests one at a time,
//! so the store needs no locking.

use crate::framework::client::PlatformClient;
use crate::framework::entity::RemoteEntity;
use crate::framework::error::ApiError;
use crate::framework::message::{PlatformRequest, Scope};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic platform task that serves one remote object type.
///
/// Objects are grouped by [`Scope`], so the same identity may exist under two sites
/// without colliding. A request addressed to an unknown scope or identity fails with
/// [`ApiError::NotFound`].
///
/// # Usage Pattern
///
/// 1. **Create**: call `PlatformActor::new()` to get the actor and its client.
/// 2. **Run**: spawn `actor.run()` in a background task.
/// 3. **Use**: hand clones of the client to whoever talks to the platform.
///
/// The task exits once every client has been dropped.
pub struct PlatformActor<T: RemoteEntity> {
    receiver: mpsc::Receiver<PlatformRequest<T>>,
    store: HashMap<Scope, HashMap<String, T>>,
    next_id_fn: Box<dyn Fn() -> String + Send + Sync>,
}

impl<T: RemoteEntity> PlatformActor<T> {
    /// Creates a new `PlatformActor` and its associated `PlatformClient`.
    ///
    /// * `buffer_size` - capacity of the request channel; callers wait when it is full.
    /// * `next_id_fn` - produces the identity of each provisioned object.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> String + Send + Sync + 'static,
    ) -> (Self, PlatformClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, PlatformClient::new(sender))
    }

    fn size(&self) -> usize {
        self.store.values().map(HashMap::len).sum()
    }

    /// Runs the request loop until the channel closes.
    pub async fn run(mut self) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Platform started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                PlatformRequest::Create { scope, respond_to } => {
                    let id = (self.next_id_fn)();
                    let item = T::from_template(id.clone(), &scope);
                    self.store
                        .entry(scope.clone())
                        .or_default()
                        .insert(id.clone(), item.clone());
                    info!(entity_type, %scope, %id, size = self.size(), "Provisioned");
                    let _ = respond_to.send(Ok(item));
                }
                PlatformRequest::Fetch {
                    scope,
                    id,
                    respond_to,
                } => {
                    let item = self
                        .store
                        .get(&scope)
                        .and_then(|objects| objects.get(&id))
                        .cloned();
                    debug!(entity_type, %scope, %id, found = item.is_some(), "Fetch");
                    let result = item.ok_or_else(|| ApiError::NotFound(id.clone()));
                    let _ = respond_to.send(result);
                }
                PlatformRequest::Replace {
                    scope,
                    id,
                    body,
                    respond_to,
                } => {
                    debug!(entity_type, %scope, %id, ?body, "Replace");
                    let Some(item) = self
                        .store
                        .get_mut(&scope)
                        .and_then(|objects| objects.get_mut(&id))
                    else {
                        warn!(entity_type, %scope, %id, "Not found");
                        let _ = respond_to.send(Err(ApiError::NotFound(id)));
                        continue;
                    };
                    let mut candidate = item.clone();
                    match candidate.apply(body) {
                        Ok(()) => {
                            *item = candidate.clone();
                            info!(entity_type, %scope, %id, "Replaced");
                            let _ = respond_to.send(Ok(candidate));
                        }
                        Err(e) => {
                            warn!(entity_type, %scope, %id, error = %e, "Replace rejected");
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                PlatformRequest::Delete {
                    scope,
                    id,
                    respond_to,
                } => {
                    let removed = self
                        .store
                        .get_mut(&scope)
                        .and_then(|objects| objects.remove(&id));
                    if removed.is_some() {
                        info!(entity_type, %scope, %id, size = self.size(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %scope, %id, "Not found");
                        let _ = respond_to.send(Err(ApiError::NotFound(id)));
                    }
                }
            }
        }

        info!(entity_type, size = self.size(), "Shutdown");
    }
}
