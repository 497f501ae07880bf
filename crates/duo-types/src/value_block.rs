//! The ValueChain's transaction-bearing block, anchored to a
//! TimeChain tip by `time_block_hash`.

use crate::error::CodecError;
use crate::layout::{read_array, read_u64_le, write_u64_le};
use crate::transaction::Transaction;
use duo_crypto::{sha256, sign, verify as crypto_verify};
use duo_primitives::{Hash, PrivateKey, PublicKey, Signature, TimePoint};

/// A ValueChain block: zero or more transactions anchored to a
/// TimeChain block, signed by its proposer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueBlock {
    /// Hash of the ValueChain's prior tip; all-zero for genesis.
    pub previous_hash: Hash,
    /// Hash of the TimeChain block this ValueBlock is anchored to.
    pub time_block_hash: Hash,
    /// Must not exceed the anchor TimeChain block's `time`.
    pub time: TimePoint,
    /// Transactions, coinbase first.
    pub transactions: Vec<Transaction>,
    /// The proposer's public key.
    pub public_key: PublicKey,
    /// Schnorr signature over `data_to_sign()`.
    pub signature: Signature,
    /// SHA-256 over `data_to_sign() ‖ signature`.
    pub hash: Hash,
}

impl ValueBlock {
    /// Build an unsigned, unhashed block.
    pub fn new(
        previous_hash: Hash,
        time_block_hash: Hash,
        time: TimePoint,
        transactions: Vec<Transaction>,
        public_key: PublicKey,
    ) -> Self {
        ValueBlock {
            previous_hash,
            time_block_hash,
            time,
            transactions,
            public_key,
            signature: Signature::ZERO,
            hash: Hash::ZERO,
        }
    }

    /// The canonical byte prefix the signature is taken over: every
    /// field up to and including the proposer `public_key`.
    pub fn data_to_sign(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(self.previous_hash.as_ref());
        out.extend_from_slice(self.time_block_hash.as_ref());
        write_u64_le(&mut out, self.time.as_nanos());
        write_u64_le(&mut out, self.transactions.len() as u64);
        for tx in &self.transactions {
            let tx_bytes = tx.serialize();
            write_u64_le(&mut out, tx_bytes.len() as u64);
            out.extend_from_slice(&tx_bytes);
        }
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

    /// Verify the block's own signature under `public_key`. Does not
    /// verify transactions or the TimeChain anchor — that is
    /// consensus-layer validation, not codec-layer.
    pub fn verify_signature(&self) -> bool {
        crypto_verify(&self.data_to_sign(), &self.signature, &self.public_key)
    }

    /// Serialize to the fixed schema:
    /// `data_to_sign() ‖ signature ‖ hash`.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = self.data_to_sign();
        out.extend_from_slice(self.signature.as_ref());
        out.extend_from_slice(self.hash.as_ref());
        out
    }

    /// Deserialize, failing on any truncation or on trailing bytes
    /// after the declared schema is fully consumed.
    pub fn deserialize(buf: &[u8]) -> Result<Self, CodecError> {
        let mut cursor = 0usize;
        let previous_hash = Hash::from_bytes(read_array::<32>(&buf[cursor..], "previous_hash")?);
        cursor += 32;

        if buf.len() < cursor + 32 {
            return Err(CodecError::Truncated {
                context: "time_block_hash",
                needed: cursor + 32,
                available: buf.len(),
            });
        }
        let time_block_hash =
            Hash::from_bytes(read_array::<32>(&buf[cursor..], "time_block_hash")?);
        cursor += 32;

        if buf.len() < cursor + 8 {
            return Err(CodecError::Truncated {
                context: "time",
                needed: cursor + 8,
                available: buf.len(),
            });
        }
        let time = TimePoint::from_nanos(read_u64_le(&buf[cursor..], "time")?);
        cursor += 8;

        if buf.len() < cursor + 8 {
            return Err(CodecError::Truncated {
                context: "tx_count",
                needed: cursor + 8,
                available: buf.len(),
            });
        }
        let tx_count = read_u64_le(&buf[cursor..], "tx_count")? as usize;
        cursor += 8;

        let mut transactions = Vec::with_capacity(tx_count);
        for _ in 0..tx_count {
            if buf.len() < cursor + 8 {
                return Err(CodecError::Truncated {
                    context: "tx_size",
                    needed: cursor + 8,
                    available: buf.len(),
                });
            }
            let tx_size = read_u64_le(&buf[cursor..], "tx_size")? as usize;
            cursor += 8;

            if buf.len() < cursor + tx_size {
                return Err(CodecError::Truncated {
                    context: "tx_bytes",
                    needed: cursor + tx_size,
                    available: buf.len(),
                });
            }
            let tx = Transaction::deserialize(&buf[cursor..cursor + tx_size])?;
            cursor += tx_size;
            transactions.push(tx);
        }

        if buf.len() < cursor + 32 {
            return Err(CodecError::Truncated {
                context: "public_key",
                needed: cursor + 32,
                available: buf.len(),
            });
        }
        let public_key = PublicKey::from_bytes(read_array::<32>(&buf[cursor..], "public_key")?);
        cursor += 32;

        if buf.len() < cursor + Signature::LEN + Hash::LEN {
            return Err(CodecError::Truncated {
                context: "signature/hash",
                needed: cursor + Signature::LEN + Hash::LEN,
                available: buf.len(),
            });
        }
        let signature = Signature::from_bytes(read_array::<64>(&buf[cursor..], "signature")?);
        cursor += Signature::LEN;
        let hash = Hash::from_bytes(read_array::<32>(&buf[cursor..], "hash")?);
        cursor += Hash::LEN;

        if cursor != buf.len() {
            return Err(CodecError::TrailingBytes {
                consumed: cursor,
                total: buf.len(),
            });
        }

        Ok(ValueBlock {
            previous_hash,
            time_block_hash,
            time,
            transactions,
            public_key,
            signature,
            hash,
        })
    }
}
