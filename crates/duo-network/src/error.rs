//! Network error types

use thiserror::Error;

/// Network errors. Per the error-handling design, read/write failures
/// close the offending session rather than propagating — only bind
/// and dial failures are surfaced to the caller.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Underlying socket operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Outbound dial failed.
    #[error("connection to {addr} failed: {source}")]
    ConnectionFailed {
        /// Address dialed.
        addr: String,
        /// Underlying error.
        source: std::io::Error,
    },
}

/// Result type for network operations.
pub type NetworkResult<T> = Result<T, NetworkError>;
