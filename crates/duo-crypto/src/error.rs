//! Cryptographic errors

use thiserror::Error;

/// Cryptographic operation error
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The private key bytes do not form a valid secp256k1 scalar.
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),
}
