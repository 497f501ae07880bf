//! The 64-byte BIP-340-style Schnorr signature container.

use std::fmt;
use thiserror::Error;

/// Signature parsing error
#[derive(Debug, Error)]
pub enum SignatureError {
    /// Invalid hex string
    #[error("invalid hex string: {0}")]
    InvalidHex(String),
    /// Invalid length
    #[error("invalid signature length: expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },
}

/// A 64-byte Schnorr signature (BIP-340 style: 32-byte `r` plus
/// 32-byte `s`).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature([u8; 64]);

impl Signature {
    /// Size in bytes
    pub const LEN: usize = 64;

    /// All-zero placeholder, used while computing a block or
    /// transaction's hash before the real signature is set.
    pub const ZERO: Signature = Signature([0u8; 64]);

    /// Wrap raw bytes.
    pub const fn from_bytes(bytes: [u8; 64]) -> Self {
        Signature(bytes)
    }

    /// Create from a byte slice, failing if the length is not 64.
    pub fn from_slice(slice: &[u8]) -> Result<Self, SignatureError> {
        if slice.len() != 64 {
            return Err(SignatureError::InvalidLength {
                expected: 64,
                got: slice.len(),
            });
        }
        let mut bytes = [0u8; 64];
        bytes.copy_from_slice(slice);
        Ok(Signature(bytes))
    }

    /// Parse from a hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, SignatureError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| SignatureError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Borrow the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Lowercase hex, without a `0x` prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self.to_hex())
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Default for Signature {
    fn default() -> Self {
        Signature::ZERO
    }
}
