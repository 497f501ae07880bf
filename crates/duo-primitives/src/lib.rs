//! # duo-primitives
//!
//! Fixed-width primitive types shared across the DuoChain workspace:
//! the block hash, the x-only secp256k1 key pair, the Schnorr
//! signature container, and the nanosecond `TimePoint`.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod hash;
mod keys;
mod signature;
mod timepoint;

pub use error::PrimitiveError;
pub use hash::{Hash, HashError};
pub use keys::{KeyError, PrivateKey, PublicKey};
pub use signature::{Signature, SignatureError};
pub use timepoint::TimePoint;
