//! # duo-crypto
//!
//! Cryptographic primitives for DuoChain.
//!
//! - SHA-256 hashing
//! - BIP-340 Schnorr signing/verification over secp256k1
//! - Private-key generation and public-key derivation

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod hash;
mod signature;

pub use error::CryptoError;
pub use hash::sha256;
pub use signature::{derive_public_key, generate_private_key, sign, verify};
