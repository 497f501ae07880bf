//! The TimeChain's heartbeat block: carries no payload beyond a
//! strictly-increasing timestamp, signed by its proposer.

use crate::error::CodecError;
use crate::layout::{read_array, read_u64_le, write_u64_le};
use duo_crypto::{sha256, sign, verify as crypto_verify};
use duo_primitives::{Hash, PrivateKey, PublicKey, Signature, TimePoint};

/// Exact serialized length: `32 + 8 + 32 + 64 + 32`.
pub const TIME_BLOCK_SIZE: usize = 168;

/// A TimeChain heartbeat block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeBlock {
    /// Hash of the chain's prior tip; all-zero for genesis.
    pub previous_hash: Hash,
    /// Strictly greater than the predecessor's `time`.
    pub time: TimePoint,
    /// The proposer's public key.
    pub public_key: PublicKey,
    /// Schnorr signature over `data_to_sign()`.
    pub signature: Signature,
    /// SHA-256 over `data_to_sign() ‖ signature`.
    pub hash: Hash,
}

impl TimeBlock {
    /// Build an unsigned, unhashed block.
    pub fn new(previous_hash: Hash, time: TimePoint, public_key: PublicKey) -> Self {
        TimeBlock {
            previous_hash,
            time,
            public_key,
            signature: Signature::ZERO,
            hash: Hash::ZERO,
        }
    }

    /// The canonical byte prefix the signature is taken over:
    /// `previous_hash ‖ time ‖ public_key`.
    pub fn data_to_sign(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(72);
        out.extend_from_slice(self.previous_hash.as_ref());
        write_u64_le(&mut out, self.time.as_nanos());
        out.extend_from_slice(self.public_key.as_ref());
        out
    }

    /// Recompute and store `self.hash` over `data_to_sign() ‖ signature`.
    pub fn compute_hash(&mut self) {
        let mut preimage = self.data_to_sign();
        preimage.extend_from_slice(self.signature.as_ref());
        self.hash = sha256(&preimage);
    }

    /// Sign with `private_key` and recompute the hash.
    pub fn sign_with(&mut self, private_key: &PrivateKey) -> Result<(), duo_crypto::CryptoError> {
        let preimage = self.data_to_sign();
        self.signature = sign(&preimage, private_key)?;
        self.compute_hash();
        Ok(())
    }

    /// Verify the block's signature under `public_key`.
    pub fn verify(&self) -> bool {
        crypto_verify(&self.data_to_sign(), &self.signature, &self.public_key)
    }

    /// Serialize to the fixed schema:
    /// `previous_hash ‖ time ‖ public_key ‖ signature ‖ hash`.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = self.data_to_sign();
        out.extend_from_slice(self.signature.as_ref());
        out.extend_from_slice(self.hash.as_ref());
        out
    }

    /// Deserialize, failing unless the buffer is exactly
    /// `TIME_BLOCK_SIZE` bytes.
    pub fn deserialize(buf: &[u8]) -> Result<Self, CodecError> {
        if buf.len() != TIME_BLOCK_SIZE {
            return Err(CodecError::WrongLength {
                expected: TIME_BLOCK_SIZE,
                got: buf.len(),
            });
        }
        let mut cursor = 0usize;
        let previous_hash = Hash::from_bytes(read_array::<32>(&buf[cursor..], "previous_hash")?);
        cursor += 32;
        let time = TimePoint::from_nanos(read_u64_le(&buf[cursor..], "time")?);
        cursor += 8;
        let public_key = PublicKey::from_bytes(read_array::<32>(&buf[cursor..], "public_key")?);
        cursor += 32;
        let signature = Signature::from_bytes(read_array::<64>(&buf[cursor..], "signature")?);
        cursor += 64;
        let hash = Hash::from_bytes(read_array::<32>(&buf[cursor..], "hash")?);
        cursor += 32;
        debug_assert_eq!(cursor, TIME_BLOCK_SIZE);

        Ok(TimeBlock {
            previous_hash,
            time,
            public_key,
            signature,
            hash,
        })
    }
}
