//! Error types for the timeline adapter

use serde::{Deserialize, Serialize};

/// Error type for timeline adapter operations.
///
/// Configuration and lifecycle inputs are forwarded untyped to the engine,
/// which owns their validation; the adapter only checks the custom seek slot.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AdapterError {
    /// A custom seek was supplied with something other than a callback
    #[error("Expected seek callback to be a function, got a {actual}")]
    InvalidSeekCallback { actual: String },
}

impl AdapterError {
    /// Create an invalid-seek-callback error naming the received type.
    pub fn invalid_seek_callback(actual: impl Into<String>) -> Self {
        Self::InvalidSeekCallback {
            actual: actual.into(),
        }
    }
}
