//! Error types for NavStack
//!
//! Deriving the presentation hierarchy never fails. Errors only come from
//! configuration parsing, route list (de)serialization, and write-backs that
//! arrive from an outdated render.

use thiserror::Error;

/// NavStack errors
#[derive(Debug, Error)]
pub enum NavError {
    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(#[source] serde_json::Error),

    /// Route list (de)serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// A write-back was issued from a render older than the current routes
    #[error("Stale render: handle from generation {rendered}, routes at generation {current}")]
    StaleRender {
        /// Generation the handle was rendered from
        rendered: u64,
        /// Current generation of the route list
        current: u64,
    },
}

/// Result type for NavStack operations
pub type Result<T> = std::result::Result<T, NavError>;
