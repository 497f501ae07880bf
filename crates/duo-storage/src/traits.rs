//! The small codec capability set `BlockStore` needs from a block
//! type — the "polymorphism over block type" the source expresses
//! via inheritance, reified here as a single trait implemented by
//! `TimeBlock` and `ValueBlock`.

use duo_primitives::Hash;
use duo_types::{CodecError, TimeBlock, ValueBlock};

/// A block type storable by `BlockStore`.
pub trait StoredBlock: Sized {
    /// The block's own content-address.
    fn block_hash(&self) -> Hash;
    /// Fixed-layout byte encoding, as defined by `duo-types`.
    fn encode(&self) -> Vec<u8>;
    /// Inverse of `encode`.
    fn decode(bytes: &[u8]) -> Result<Self, CodecError>;
}

impl StoredBlock for TimeBlock {
    fn block_hash(&self) -> Hash {
        self.hash
    }
    fn encode(&self) -> Vec<u8> {
        self.serialize()
    }
    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        TimeBlock::deserialize(bytes)
    }
}

impl StoredBlock for ValueBlock {
    fn block_hash(&self) -> Hash {
        self.hash
    }
    fn encode(&self) -> Vec<u8> {
        self.serialize()
    }
    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        ValueBlock::deserialize(bytes)
    }
}
