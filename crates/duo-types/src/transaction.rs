//! The fixed-layout `Transaction`: a transfer of `amount` from
//! `sender` to `recipient`, carrying opaque `data`, Schnorr-signed by
//! `sender` — except for the coinbase flavor, whose all-zero sender
//! bypasses signature verification.

use crate::error::CodecError;
use crate::layout::{read_array, read_u64_le, write_u64_le};
use duo_crypto::{sha256, sign, verify as crypto_verify};
use duo_primitives::{Hash, PrivateKey, PublicKey, Signature};

/// The minimum serialized length: every field at its smallest, i.e.
/// `data_len == 0`. `32 + 32 + 8 + 8 + 0 + 64 + 32`.
pub const MIN_TRANSACTION_SIZE: usize = 176;

/// A signed (or coinbase) transfer, as stored inside a `ValueBlock`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// All-zero for a coinbase transaction.
    pub sender: PublicKey,
    /// Recipient of `amount`.
    pub recipient: PublicKey,
    /// Amount transferred.
    pub amount: u64,
    /// Opaque payload.
    pub data: Vec<u8>,
    /// Schnorr signature over `data_to_sign()`; bypassed for coinbase.
    pub signature: Signature,
    /// SHA-256 over `data_to_sign() ‖ signature`.
    pub hash: Hash,
}

impl Transaction {
    /// Build an unsigned, unhashed transaction. Callers must `sign`
    /// it (for non-coinbase transactions) and then `compute_hash`.
    pub fn new(sender: PublicKey, recipient: PublicKey, amount: u64, data: Vec<u8>) -> Self {
        Transaction {
            sender,
            recipient,
            amount,
            data,
            signature: Signature::ZERO,
            hash: Hash::ZERO,
        }
    }

    /// True if `sender` is the all-zero coinbase marker.
    pub fn is_coinbase(&self) -> bool {
        self.sender.is_zero()
    }

    /// The canonical byte prefix the signature is taken over:
    /// `sender ‖ recipient ‖ amount ‖ data_len ‖ data`.
    pub fn data_to_sign(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(80 + self.data.len());
        out.extend_from_slice(self.sender.as_ref());
        out.extend_from_slice(self.recipient.as_ref());
        write_u64_le(&mut out, self.amount);
        write_u64_le(&mut out, self.data.len() as u64);
        out.extend_from_slice(&self.data);
        out
    }

    /// Recompute and store `self.hash` over `data_to_sign() ‖
    /// signature`. The signature must already be set (real or left
    /// zeroed, per the codec contract) before this is called.
    pub fn compute_hash(&mut self) {
        let mut preimage = self.data_to_sign();
        preimage.extend_from_slice(self.signature.as_ref());
        self.hash = sha256(&preimage);
    }

    /// Sign with `private_key` and recompute the hash. Not meaningful
    /// for a coinbase transaction, whose signature is never checked.
    pub fn sign_with(&mut self, private_key: &PrivateKey) -> Result<(), duo_crypto::CryptoError> {
        let preimage = self.data_to_sign();
        self.signature = sign(&preimage, private_key)?;
        self.compute_hash();
        Ok(())
    }

    /// Build a signed coinbase transaction rewarding `recipient`
    /// with `amount`, signed by the proposer's key.
    pub fn coinbase(
        recipient: PublicKey,
        amount: u64,
        proposer_key: &PrivateKey,
    ) -> Result<Self, duo_crypto::CryptoError> {
        let mut tx = Transaction::new(PublicKey::ZERO, recipient, amount, Vec::new());
        // Coinbase signatures are never checked by `verify`, but a
        // stable hash still requires some deterministic signature
        // bytes; sign with the proposer's key like any other field.
        tx.sign_with(proposer_key)?;
        Ok(tx)
    }

    /// Verify the transaction's signature. Coinbase transactions
    /// always verify (their signature is not checked).
    pub fn verify(&self) -> bool {
        if self.is_coinbase() {
            return true;
        }
        crypto_verify(&self.data_to_sign(), &self.signature, &self.sender)
    }

    /// Serialize to the fixed schema:
    /// `sender ‖ recipient ‖ amount ‖ data_len ‖ data ‖ signature ‖ hash`.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = self.data_to_sign();
        out.extend_from_slice(self.signature.as_ref());
        out.extend_from_slice(self.hash.as_ref());
        out
    }

    /// Deserialize, failing if the buffer is shorter than the
    /// minimum schema, if `data_len` runs past the end of the buffer,
    /// or if bytes remain after the declared fields are consumed.
    pub fn deserialize(buf: &[u8]) -> Result<Self, CodecError> {
        if buf.len() < MIN_TRANSACTION_SIZE {
            return Err(CodecError::Truncated {
                context: "transaction",
                needed: MIN_TRANSACTION_SIZE,
                available: buf.len(),
            });
        }
        let mut cursor = 0usize;
        let sender = PublicKey::from_bytes(read_array::<32>(&buf[cursor..], "sender")?);
        cursor += 32;
        let recipient = PublicKey::from_bytes(read_array::<32>(&buf[cursor..], "recipient")?);
        cursor += 32;
        let amount = read_u64_le(&buf[cursor..], "amount")?;
        cursor += 8;
        let data_len = read_u64_le(&buf[cursor..], "data_len")? as usize;
        cursor += 8;

        if buf.len() < cursor + data_len + Signature::LEN + Hash::LEN {
            return Err(CodecError::Truncated {
                context: "transaction data/signature/hash",
                needed: cursor + data_len + Signature::LEN + Hash::LEN,
                available: buf.len(),
            });
        }
        let data = buf[cursor..cursor + data_len].to_vec();
        cursor += data_len;

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

        Ok(Transaction {
            sender,
            recipient,
            amount,
            data,
            signature,
            hash,
        })
    }
}
