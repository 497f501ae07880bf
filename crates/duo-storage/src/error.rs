//! Storage error types

use duo_types::CodecError;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying filesystem operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored file's bytes did not decode as the expected block type.
    #[error("corrupt block file: {0}")]
    Codec(#[from] CodecError),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
