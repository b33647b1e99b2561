//! Error types for the generation client.
//!
//! These never reach the user directly: `GenerationClient::generate` logs
//! them and reports the fixed failure message instead.

use thiserror::Error;

/// Errors that can occur while calling the generation service.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Connection, TLS or timeout failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-success status.
    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}
