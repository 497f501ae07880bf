//! TimeChain consensus: the heartbeat chain establishing shared
//! logical time. Eligibility to produce a block is a local coin-flip
//! over a uniform draw — not a Sybil defense, just a rate limiter.

use duo_crypto::verify;
use duo_primitives::{Hash, PrivateKey, PublicKey, TimePoint};
use duo_storage::{BlockStore, TimeChainView};
use duo_types::TimeBlock;
use rand::RngCore;
use std::sync::Arc;

use crate::error::{ConsensusError, ConsensusResult};

/// Threshold below which a uniform u64 draw counts as "eligible":
/// roughly one in ten production attempts succeeds.
const ELIGIBILITY_THRESHOLD: u64 = u64::MAX / 10;

/// Drives TimeChain block production, validation, and acceptance.
pub struct TimeChainConsensus {
    store: Arc<BlockStore<TimeBlock>>,
    view: TimeChainView,
    public_key: PublicKey,
    private_key: PrivateKey,
}

impl TimeChainConsensus {
    /// Build the engine around a store and the node's own key pair.
    pub fn new(store: Arc<BlockStore<TimeBlock>>, public_key: PublicKey, private_key: PrivateKey) -> Self {
        let view = TimeChainView::new(Arc::clone(&store));
        TimeChainConsensus {
            store,
            view,
            public_key,
            private_key,
        }
    }

    /// A read-only handle onto this chain, shareable with other
    /// components (e.g. the ValueChain engine).
    pub fn view(&self) -> TimeChainView {
        self.view.clone()
    }

    /// If the store is empty, decode `genesis_bytes`, verify its hash
    /// equals `expected_hash`, and store it as the chain's first
    /// block. If the store already has a tip, do nothing.
    pub fn initialize(&self, genesis_bytes: &[u8], expected_hash: Hash) -> ConsensusResult<()> {
        if self.view.get_latest_block()?.is_some() {
            return Ok(());
        }

        let mut genesis = TimeBlock::deserialize(genesis_bytes)?;
        genesis.compute_hash();
        if genesis.hash != expected_hash {
            return Err(ConsensusError::GenesisHashMismatch {
                expected: expected_hash.to_hex(),
                got: genesis.hash.to_hex(),
            });
        }

        self.store.store_block(&genesis)?;
        tracing::info!(hash = %genesis.hash.to_hex(), "TimeChain genesis stored");
        Ok(())
    }

    /// Signature and monotonicity checks. Does not touch storage.
    pub fn validate_block(&self, block: &TimeBlock) -> bool {
        if let Ok(Some(tip)) = self.view.get_latest_block() {
            if block.time <= tip.time {
                tracing::warn!("rejecting TimeBlock: time does not advance past tip");
                return false;
            }
        }
        if !verify(&block.data_to_sign(), &block.signature, &block.public_key) {
            tracing::warn!("rejecting TimeBlock: signature verification failed");
            return false;
        }
        true
    }

    /// A uniform local coin-flip; true roughly 10% of the time.
    pub fn is_eligible_to_produce_block(&self) -> bool {
        rand::thread_rng().next_u64() < ELIGIBILITY_THRESHOLD
    }

    /// Produce, sign, and store a new tip if eligible. Does not
    /// re-validate the block it just built against `validate_block`.
    pub fn produce_block(&self) -> Option<TimeBlock> {
        if !self.is_eligible_to_produce_block() {
            return None;
        }

        let previous_hash = match self.view.get_latest_block_hash() {
            Ok(hash) => hash,
            Err(e) => {
                tracing::error!(error = %e, "failed to read TimeChain tip");
                return None;
            }
        };

        let mut block = TimeBlock::new(previous_hash, TimePoint::now(), self.public_key);
        if let Err(e) = block.sign_with(&self.private_key) {
            tracing::error!(error = %e, "failed to sign TimeBlock");
            return None;
        }

        if let Err(e) = self.store.store_block(&block) {
            tracing::error!(error = %e, "failed to store produced TimeBlock");
            return None;
        }

        Some(block)
    }

    /// Validate then store; log and drop on any failure.
    pub fn handle_block(&self, block: &TimeBlock) {
        if !self.validate_block(block) {
            return;
        }
        if let Err(e) = self.store.store_block(block) {
            tracing::error!(error = %e, "failed to store accepted TimeBlock");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duo_crypto::{derive_public_key, generate_private_key};
    use tempfile::tempdir;

    fn engine() -> (TimeChainConsensus, PrivateKey) {
        // `into_path()` disables the guard's automatic cleanup so the
        // directory survives past this helper, for the life of the test.
        let dir = tempdir().unwrap().into_path();
        let store = Arc::new(BlockStore::new(dir));
        store.initialize().unwrap();
        let sk = generate_private_key();
        let pk = derive_public_key(&sk).unwrap();
        (TimeChainConsensus::new(store, pk, sk.clone()), sk)
    }

    fn genesis_bytes_and_hash(private_key: &PrivateKey, public_key: PublicKey) -> (Vec<u8>, Hash) {
        let mut block = TimeBlock::new(Hash::ZERO, TimePoint::from_nanos(0), public_key);
        block.sign_with(private_key).unwrap();
        (block.serialize(), block.hash)
    }

    // ==================== Initialize ====================

    #[test]
    fn initialize_stores_genesis_on_empty_chain() {
        let (engine, sk) = engine();
        let (bytes, hash) = genesis_bytes_and_hash(&sk, engine.public_key);
        engine.initialize(&bytes, hash).unwrap();
        assert_eq!(engine.view().get_latest_block_hash().unwrap(), hash);
    }

    #[test]
    fn initialize_is_noop_on_nonempty_chain() {
        let (engine, sk) = engine();
        let (bytes, hash) = genesis_bytes_and_hash(&sk, engine.public_key);
        engine.initialize(&bytes, hash).unwrap();

        let produced = engine_force_produce(&engine);
        engine.initialize(&bytes, hash).unwrap();
        assert_eq!(engine.view().get_latest_block_hash().unwrap(), produced.hash);
    }

    #[test]
    fn initialize_rejects_hash_mismatch() {
        let (engine, sk) = engine();
        let (bytes, _correct_hash) = genesis_bytes_and_hash(&sk, engine.public_key);
        let wrong_hash = Hash::from_bytes([0xAA; 32]);
        let result = engine.initialize(&bytes, wrong_hash);
        assert!(matches!(result, Err(ConsensusError::GenesisHashMismatch { .. })));
    }

    // ==================== Validate ====================

    #[test]
    fn validate_accepts_wellformed_block() {
        let (engine, sk) = engine();
        let pk = engine.public_key;
        let mut block = TimeBlock::new(Hash::ZERO, TimePoint::from_nanos(1), pk);
        block.sign_with(&sk).unwrap();
        assert!(engine.validate_block(&block));
    }

    #[test]
    fn validate_rejects_bad_signature() {
        let (engine, sk) = engine();
        let pk = engine.public_key;
        let mut block = TimeBlock::new(Hash::ZERO, TimePoint::from_nanos(1), pk);
        block.sign_with(&sk).unwrap();
        block.time = TimePoint::from_nanos(2);
        assert!(!engine.validate_block(&block));
    }

    #[test]
    fn validate_rejects_non_advancing_time() {
        let (engine, sk) = engine();
        let (bytes, hash) = genesis_bytes_and_hash(&sk, engine.public_key);
        engine.initialize(&bytes, hash).unwrap();

        let mut stale = TimeBlock::new(hash, TimePoint::from_nanos(0), engine.public_key);
        stale.sign_with(&sk).unwrap();
        assert!(!engine.validate_block(&stale));
    }

    // ==================== Produce / handle ====================

    fn engine_force_produce(engine: &TimeChainConsensus) -> TimeBlock {
        loop {
            if let Some(b) = engine.produce_block() {
                return b;
            }
        }
    }

    #[test]
    fn produced_block_chains_from_prior_tip() {
        let (engine, sk) = engine();
        let (bytes, hash) = genesis_bytes_and_hash(&sk, engine.public_key);
        engine.initialize(&bytes, hash).unwrap();

        let produced = engine_force_produce(&engine);
        assert_eq!(produced.previous_hash, hash);
        assert_eq!(engine.view().get_latest_block_hash().unwrap(), produced.hash);
    }

    #[test]
    fn handle_block_drops_invalid_block_silently() {
        let (engine, sk) = engine();
        let mut block = TimeBlock::new(Hash::ZERO, TimePoint::from_nanos(1), engine.public_key);
        block.sign_with(&sk).unwrap();
        block.time = TimePoint::from_nanos(999);

        engine.handle_block(&block);
        assert!(engine.view().get_latest_block().unwrap().is_none());
    }

    #[test]
    fn handle_block_stores_valid_block() {
        let (engine, sk) = engine();
        let mut block = TimeBlock::new(Hash::ZERO, TimePoint::from_nanos(1), engine.public_key);
        block.sign_with(&sk).unwrap();

        engine.handle_block(&block);
        assert_eq!(engine.view().get_latest_block_hash().unwrap(), block.hash);
    }
}
