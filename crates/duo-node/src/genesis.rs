//! Genesis block handling for duo-node: load the embedded TimeChain
//! and ValueChain genesis blobs into an empty store.

use crate::genesis_data::{
    TIME_BLOCK_GENESIS_BYTES, TIME_BLOCK_GENESIS_HASH, VALUE_BLOCK_GENESIS_BYTES,
    VALUE_BLOCK_GENESIS_HASH,
};
use duo_consensus::{ConsensusError, TimeChainConsensus, ValueChainConsensus};
use duo_primitives::Hash;
use thiserror::Error;

/// Genesis error types
#[derive(Debug, Error)]
pub enum GenesisError {
    /// The embedded blob failed to decode, or its recomputed hash
    /// did not match the embedded expected hash.
    #[error("genesis consensus error: {0}")]
    Consensus(#[from] ConsensusError),
}

/// Result type for genesis operations
pub type GenesisResult<T> = Result<T, GenesisError>;

/// Load the embedded TimeChain genesis block if the store is empty.
/// No-op if the store already has a tip.
pub fn initialize_time_chain(engine: &TimeChainConsensus) -> GenesisResult<()> {
    let expected = Hash::from_bytes(TIME_BLOCK_GENESIS_HASH);
    engine.initialize(&TIME_BLOCK_GENESIS_BYTES, expected)?;
    Ok(())
}

/// Load the embedded ValueChain genesis block if the store is empty.
/// No-op if the store already has a tip.
pub fn initialize_value_chain(engine: &ValueChainConsensus) -> GenesisResult<()> {
    let expected = Hash::from_bytes(VALUE_BLOCK_GENESIS_HASH);
    engine.initialize(&VALUE_BLOCK_GENESIS_BYTES, expected)?;
    Ok(())
}

/// Builds a genesis TimeBlock and ValueBlock pair from scratch, using
/// this crate's own codec and signing routines rather than the
/// embedded constants. Exists to demonstrate (and let a future
/// regeneration script exercise) the exact derivation the committed
/// blobs in `genesis_data` were produced by — not to reproduce them
/// byte-for-byte, since Schnorr signing draws fresh auxiliary
/// randomness on every call and so never reproduces the same
/// signature bytes twice.
#[cfg(test)]
pub fn build_reference_genesis() -> (duo_types::TimeBlock, duo_types::ValueBlock) {
    use duo_crypto::{derive_public_key, sha256};
    use duo_primitives::{PrivateKey, TimePoint};
    use duo_types::{Transaction, ValueBlock};

    const GENESIS_TIME_NANOS: u64 = 1_730_467_980_000_000_000;
    const GENESIS_TX_DATA: &str = "First ValueChain Genesis Block Reference";

    let seed = sha256(b"duochain genesis key");
    let private_key = PrivateKey::from_bytes(*seed.as_bytes());
    let public_key = derive_public_key(&private_key).expect("genesis seed is a valid scalar");

    let mut time_block = duo_types::TimeBlock::new(
        Hash::ZERO,
        TimePoint::from_nanos(GENESIS_TIME_NANOS),
        public_key,
    );
    time_block.sign_with(&private_key).expect("genesis signing never fails");

    let mut coinbase =
        Transaction::coinbase(public_key, 0, &private_key).expect("genesis signing never fails");
    coinbase.data = GENESIS_TX_DATA.as_bytes().to_vec();
    coinbase.compute_hash();

    let mut value_block = ValueBlock::new(
        Hash::ZERO,
        time_block.hash,
        TimePoint::from_nanos(GENESIS_TIME_NANOS),
        vec![coinbase],
        public_key,
    );
    value_block.sign_with(&private_key).expect("genesis signing never fails");

    (time_block, value_block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use duo_crypto::{derive_public_key, generate_private_key};
    use duo_storage::BlockStore;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn time_engine() -> TimeChainConsensus {
        let dir = tempdir().unwrap().into_path();
        let store = Arc::new(BlockStore::new(dir));
        store.initialize().unwrap();
        let sk = generate_private_key();
        let pk = derive_public_key(&sk).unwrap();
        TimeChainConsensus::new(store, pk, sk)
    }

    fn value_engine() -> ValueChainConsensus {
        let dir = tempdir().unwrap().into_path();
        let time_store = Arc::new(BlockStore::new(dir.join("time")));
        time_store.initialize().unwrap();
        let value_store = Arc::new(BlockStore::new(dir.join("value")));
        value_store.initialize().unwrap();
        let sk = generate_private_key();
        let pk = derive_public_key(&sk).unwrap();
        let time_view = duo_storage::TimeChainView::new(time_store);
        ValueChainConsensus::new(value_store, time_view, pk, sk)
    }

    #[test]
    fn time_chain_genesis_loads_into_empty_store() {
        let engine = time_engine();
        initialize_time_chain(&engine).unwrap();
        let tip = engine.view().get_latest_block().unwrap().unwrap();
        assert_eq!(tip.hash, Hash::from_bytes(TIME_BLOCK_GENESIS_HASH));
        assert!(tip.previous_hash.is_zero());
    }

    #[test]
    fn time_chain_genesis_is_idempotent() {
        let engine = time_engine();
        initialize_time_chain(&engine).unwrap();
        initialize_time_chain(&engine).unwrap();
        let tip = engine.view().get_latest_block().unwrap().unwrap();
        assert_eq!(tip.hash, Hash::from_bytes(TIME_BLOCK_GENESIS_HASH));
    }

    #[test]
    fn value_chain_genesis_loads_into_empty_store() {
        let engine = value_engine();
        initialize_value_chain(&engine).unwrap();
        let tip = engine.view().get_latest_block().unwrap().unwrap();
        assert_eq!(tip.hash, Hash::from_bytes(VALUE_BLOCK_GENESIS_HASH));
        assert_eq!(tip.transactions.len(), 1);
        assert!(tip.transactions[0].is_coinbase());
    }

    #[test]
    fn reference_genesis_time_block_verifies() {
        let (time_block, _value_block) = build_reference_genesis();
        assert!(time_block.verify());
        assert!(time_block.previous_hash.is_zero());
    }

    #[test]
    fn reference_genesis_value_block_verifies() {
        let (time_block, value_block) = build_reference_genesis();
        assert!(value_block.verify_signature());
        assert_eq!(value_block.time_block_hash, time_block.hash);
        assert_eq!(value_block.transactions.len(), 1);
        assert!(value_block.transactions[0].is_coinbase());
        assert_eq!(
            value_block.transactions[0].data,
            b"First ValueChain Genesis Block Reference"
        );
    }
}
