//! secp256k1 key material: a 32-byte x-only public key and a 32-byte
//! private scalar. Construction and signing live in `duo-crypto`; this
//! crate only owns the fixed-width byte containers and their
//! serialization, so that `duo-types` can depend on key shapes without
//! depending on the secp256k1 backend.

use std::fmt;
use thiserror::Error;

/// Key parsing error
#[derive(Debug, Error)]
pub enum KeyError {
    /// Invalid hex string
    #[error("invalid hex string: {0}")]
    InvalidHex(String),
    /// Invalid length
    #[error("invalid key length: expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },
}

/// A 32-byte x-only secp256k1 public key (BIP-340 style).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    /// Size in bytes
    pub const LEN: usize = 32;

    /// The all-zero public key — used as the coinbase sender marker.
    pub const ZERO: PublicKey = PublicKey([0u8; 32]);

    /// Wrap raw bytes without validating they lie on the curve. Use
    /// `duo_crypto::derive_public_key` to produce a key guaranteed
    /// valid for signing.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        PublicKey(bytes)
    }

    /// Create from a byte slice, failing if the length is not 32.
    pub fn from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        if slice.len() != 32 {
            return Err(KeyError::InvalidLength {
                expected: 32,
                got: slice.len(),
            });
        }
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(slice);
        Ok(PublicKey(bytes))
    }

    /// Parse from a hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| KeyError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Borrow the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// True for the all-zero key — marks a coinbase transaction's sender.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Lowercase hex, without a `0x` prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for PublicKey {
    fn from(bytes: [u8; 32]) -> Self {
        PublicKey(bytes)
    }
}

/// A 32-byte secp256k1 private scalar. Never implements `Debug`'s
/// default derive over raw bytes so accidental logging doesn't leak
/// key material; `Debug` prints a redacted placeholder.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PrivateKey([u8; 32]);

impl PrivateKey {
    /// Size in bytes
    pub const LEN: usize = 32;

    /// Wrap raw bytes without validating the scalar range. Use
    /// `duo_crypto::generate_private_key` for a CSPRNG-backed key.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        PrivateKey(bytes)
    }

    /// Create from a byte slice, failing if the length is not 32.
    pub fn from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        if slice.len() != 32 {
            return Err(KeyError::InvalidLength {
                expected: 32,
                got: slice.len(),
            });
        }
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(slice);
        Ok(PrivateKey(bytes))
    }

    /// Borrow the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_key_zero_is_zero() {
        assert!(PublicKey::ZERO.is_zero());
    }

    #[test]
    fn public_key_hex_roundtrip() {
        let original = "ab".repeat(32);
        let key = PublicKey::from_hex(&original).unwrap();
        assert_eq!(key.to_hex(), original);
    }

    #[test]
    fn public_key_from_slice_rejects_wrong_length() {
        assert!(PublicKey::from_slice(&[0u8; 31]).is_err());
        assert!(PublicKey::from_slice(&[0u8; 33]).is_err());
    }

    #[test]
    fn public_key_non_zero() {
        let key = PublicKey::from_bytes([1; 32]);
        assert!(!key.is_zero());
    }

    #[test]
    fn private_key_debug_does_not_leak_bytes() {
        let key = PrivateKey::from_bytes([0xAA; 32]);
        assert_eq!(format!("{:?}", key), "PrivateKey(..)");
    }

    #[test]
    fn private_key_from_slice_rejects_wrong_length() {
        assert!(PrivateKey::from_slice(&[0u8; 31]).is_err());
    }

    #[test]
    fn private_key_from_slice_accepts_exact() {
        let bytes = [7u8; 32];
        assert_eq!(PrivateKey::from_slice(&bytes).unwrap().as_bytes(), &bytes);
    }
}
