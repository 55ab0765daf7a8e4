//! Error types for the templated rule lifecycle.

use crate::framework::ApiError;
use crate::templated_rule::state::TemplatedRuleState;
use thiserror::Error;

/// Errors that can occur during a lifecycle operation.
///
/// Remote failures keep the platform's own message. Two variants carry a record the host
/// must persist in place of its previous one, because a remote change already happened
/// before the failure; see [`LifecycleError::committed_state`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LifecycleError {
    /// The platform rejected or failed a call. Nothing was committed.
    #[error(transparent)]
    Remote(#[from] ApiError),

    /// Read, update or delete was asked for a record that has no remote object.
    #[error("templated rule has no identity; create it first")]
    MissingIdentity,

    /// Create was asked for a record that already has a remote object.
    #[error("templated rule already exists with id {0}")]
    AlreadyCreated(String),

    /// An import id was not of the form `<site_short_name>:<id>`.
    #[error("invalid import id {0:?}; expected <site_short_name>:<id>")]
    InvalidImportId(String),

    /// The remote write succeeded but the read-back failed.
    #[error("{source}")]
    Refresh {
        state: Box<TemplatedRuleState>,
        source: ApiError,
    },

    /// Create's read-back failed and the cleanup delete failed too, leaving a remote
    /// object behind.
    #[error("{source}; cleanup of rule {id} also failed: {cleanup}")]
    Orphaned {
        id: String,
        state: Box<TemplatedRuleState>,
        source: ApiError,
        cleanup: ApiError,
    },
}

impl LifecycleError {
    /// The record to persist after this failure, when a remote change was committed.
    pub fn committed_state(&self) -> Option<&TemplatedRuleState> {
        match self {
            LifecycleError::Refresh { state, .. } | LifecycleError::Orphaned { state, .. } => {
                Some(&**state)
            }
            _ => None,
        }
    }

    /// The underlying platform error, if any.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            LifecycleError::Remote(e)
            | LifecycleError::Refresh { source: e, .. }
            | LifecycleError::Orphaned { source: e, .. } => Some(e),
            _ => None,
        }
    }
}
