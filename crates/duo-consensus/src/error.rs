//! Consensus error types

use thiserror::Error;

/// Consensus errors. Per the error-handling design, initialization
/// failures are the only ones that propagate to the caller — every
/// other failure (bad signature, stale time, storage hiccup) is
/// logged and the offending block is dropped.
#[derive(Debug, Error)]
pub enum ConsensusError {
    /// The embedded genesis blob's recomputed hash did not match the
    /// expected hash compiled alongside it.
    #[error("genesis hash mismatch: expected {expected}, got {got}")]
    GenesisHashMismatch {
        /// Expected hash, hex-encoded.
        expected: String,
        /// Hash recomputed from the blob, hex-encoded.
        got: String,
    },

    /// The embedded genesis blob failed to decode.
    #[error("genesis blob decode failed: {0}")]
    GenesisCodec(#[from] duo_types::CodecError),

    /// Underlying store operation failed.
    #[error("store error: {0}")]
    Storage(#[from] duo_storage::StorageError),
}

/// Result type for consensus operations.
pub type ConsensusResult<T> = Result<T, ConsensusError>;
