//! Pure data structures for the remote rule object and its replacement payload.

pub mod custom_alert;

pub use custom_alert::*;
