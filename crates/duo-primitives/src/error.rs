//! Aggregated error type for primitive parsing failures.

use crate::hash::HashError;
use crate::keys::KeyError;
use crate::signature::SignatureError;
use thiserror::Error;

/// Primitive parsing error
#[derive(Debug, Error)]
pub enum PrimitiveError {
    /// Hash parsing error
    #[error("hash error: {0}")]
    Hash(#[from] HashError),

    /// Key parsing error
    #[error("key error: {0}")]
    Key(#[from] KeyError),

    /// Signature parsing error
    #[error("signature error: {0}")]
    Signature(#[from] SignatureError),
}
