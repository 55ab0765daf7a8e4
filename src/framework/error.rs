//! # Platform Errors
//!
//! Every failure the remote platform can hand back to a caller. The reconciler passes
//! these through untouched, so the `Display` text here is exactly what a host will show.

/// Errors returned by the remote platform (or by the channel that reaches it).
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Platform closed")]
    PlatformClosed,
    #[error("Platform dropped response channel")]
    PlatformDropped,
    #[error("Object not found: {0}")]
    NotFound(String),
    #[error("Request rejected: {0}")]
    Rejected(String),
    #[error("Permission denied: {0}")]
    Forbidden(String),
}

impl ApiError {
    /// True when the platform reports that the addressed object does not exist.
    ///
    /// The reconciler never acts on this itself; hosts that treat a vanished object as
    /// already deleted can use it to decide.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}
