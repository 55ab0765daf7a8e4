//! Templated rule resource: declared state, reconciler, schema and the platform-side
//! behaviour of the remote object.

pub mod entity;
pub mod error;
pub mod resource;
pub mod schema;
pub mod state;

pub use error::*;
pub use resource::*;
pub use state::*;

use crate::clients::AlertClient;
use crate::framework::PlatformActor;
use crate::model::CustomAlert;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates an in-memory custom alert platform and a client for it.
pub fn new_platform(buffer_size: usize) -> (PlatformActor<CustomAlert>, AlertClient) {
    let alert_id_counter = Arc::new(AtomicU64::new(1));
    let next_alert_id = move || {
        let id = alert_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("al_{}", id)
    };

    let (actor, generic_client) = PlatformActor::new(buffer_size, next_alert_id);
    let client = AlertClient::new(generic_client);

    (actor, client)
}
