//! ValueChain consensus: the transaction-bearing chain, each block
//! anchored to a TimeChain block. Owns the pending-transaction pool
//! and a read-only view onto the TimeChain.

use duo_crypto::verify;
use duo_primitives::{Hash, PrivateKey, PublicKey};
use duo_storage::{BlockStore, TimeChainView, ValueChainView};
use duo_txpool::TxPool;
use duo_types::{Transaction, ValueBlock};
use rand::RngCore;
use std::sync::Arc;

use crate::error::{ConsensusError, ConsensusResult};

/// Coinbase reward paid to the block proposer. Unconditional — there
/// is no halving schedule.
const COINBASE_AMOUNT: u64 = 50;

/// Threshold below which a uniform u64 draw counts as "eligible":
/// roughly one in a hundred production attempts succeeds, further
/// adjusted by wall-clock drift below. This mirrors the source's
/// `threshold + (current_time % threshold)` formula exactly,
/// including its potential to overflow and wrap past `UINT64_MAX` —
/// preserved deliberately rather than fixed.
const BASE_ELIGIBILITY_THRESHOLD: u64 = u64::MAX / 100;

/// Drives ValueChain block production, validation, and acceptance.
pub struct ValueChainConsensus {
    store: Arc<BlockStore<ValueBlock>>,
    view: ValueChainView,
    time_chain: TimeChainView,
    pool: TxPool,
    public_key: PublicKey,
    private_key: PrivateKey,
}

impl ValueChainConsensus {
    /// Build the engine around a store, a view onto the TimeChain it
    /// anchors to, and the node's own key pair.
    pub fn new(
        store: Arc<BlockStore<ValueBlock>>,
        time_chain: TimeChainView,
        public_key: PublicKey,
        private_key: PrivateKey,
    ) -> Self {
        let view = ValueChainView::new(Arc::clone(&store));
        ValueChainConsensus {
            store,
            view,
            time_chain,
            pool: TxPool::new(),
            public_key,
            private_key,
        }
    }

    /// A read-only handle onto this chain.
    pub fn view(&self) -> ValueChainView {
        self.view.clone()
    }

    /// Append a transaction to the pool. No validation at insertion.
    pub fn add_transaction(&self, tx: Transaction) {
        self.pool.add_transaction(tx);
    }

    /// If the store is empty, decode `genesis_bytes`, verify its hash
    /// equals `expected_hash`, and store it as the chain's first
    /// block.
    pub fn initialize(&self, genesis_bytes: &[u8], expected_hash: Hash) -> ConsensusResult<()> {
        if self.view.get_latest_block()?.is_some() {
            return Ok(());
        }

        let mut genesis = ValueBlock::deserialize(genesis_bytes)?;
        genesis.compute_hash();
        if genesis.hash != expected_hash {
            return Err(ConsensusError::GenesisHashMismatch {
                expected: expected_hash.to_hex(),
                got: genesis.hash.to_hex(),
            });
        }

        self.store.store_block(&genesis)?;
        tracing::info!(hash = %genesis.hash.to_hex(), "ValueChain genesis stored");
        Ok(())
    }

    /// Threshold is the base rate adjusted by wall-clock drift,
    /// exactly as the source computes it — including its wraparound.
    fn eligibility_threshold(&self) -> u64 {
        let now = duo_primitives::TimePoint::now().as_nanos();
        BASE_ELIGIBILITY_THRESHOLD.wrapping_add(now % BASE_ELIGIBILITY_THRESHOLD)
    }

    /// A uniform local coin-flip against the drifting threshold.
    pub fn is_eligible_to_produce_block(&self) -> bool {
        rand::thread_rng().next_u64() < self.eligibility_threshold()
    }

    /// Produce, sign, and store a new tip if eligible and the pool is
    /// non-empty. Drains the pool and prepends a coinbase transaction.
    pub fn produce_block(&self) -> Option<ValueBlock> {
        if !self.is_eligible_to_produce_block() {
            return None;
        }
        if self.pool.is_empty() {
            return None;
        }

        let previous_hash = match self.view.get_latest_block_hash() {
            Ok(hash) => hash,
            Err(e) => {
                tracing::error!(error = %e, "failed to read ValueChain tip");
                return None;
            }
        };

        let time_tip = match self.time_chain.get_latest_block() {
            Ok(Some(tip)) => tip,
            Ok(None) => {
                tracing::error!("ValueChain production attempted with empty TimeChain");
                return None;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to read TimeChain tip");
                return None;
            }
        };

        let coinbase = match Transaction::coinbase(self.public_key, COINBASE_AMOUNT, &self.private_key) {
            Ok(tx) => tx,
            Err(e) => {
                tracing::error!(error = %e, "failed to build coinbase transaction");
                return None;
            }
        };

        let mut transactions = self.pool.drain();
        transactions.insert(0, coinbase);

        let mut block = ValueBlock::new(
            previous_hash,
            time_tip.hash,
            time_tip.time,
            transactions,
            self.public_key,
        );
        if let Err(e) = block.sign_with(&self.private_key) {
            tracing::error!(error = %e, "failed to sign ValueBlock");
            return None;
        }

        if let Err(e) = self.store.store_block(&block) {
            tracing::error!(error = %e, "failed to store produced ValueBlock");
            return None;
        }

        Some(block)
    }

    /// (a) the anchor TimeBlock is known locally; (b) the block's
    /// time does not outrun the local TimeChain tip; (c) every
    /// transaction verifies (coinbase bypasses signature check); (d)
    /// the block signature verifies.
    pub fn validate_block(&self, block: &ValueBlock) -> bool {
        match self.time_chain.block_exists(&block.time_block_hash) {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!("rejecting ValueBlock: unknown TimeChain anchor");
                return false;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to check TimeChain anchor");
                return false;
            }
        }

        match self.time_chain.get_latest_block() {
            Ok(Some(tip)) if block.time > tip.time => {
                tracing::warn!("rejecting ValueBlock: time outruns TimeChain tip");
                return false;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!(error = %e, "failed to read TimeChain tip");
                return false;
            }
        }

        if !block.transactions.iter().all(Transaction::verify) {
            tracing::warn!("rejecting ValueBlock: a transaction failed to verify");
            return false;
        }

        if !verify(&block.data_to_sign(), &block.signature, &block.public_key) {
            tracing::warn!("rejecting ValueBlock: signature verification failed");
            return false;
        }

        true
    }

    /// Validate, store, then remove the block's transactions from the
    /// pool so they are not offered again by a later `drain`.
    pub fn handle_block(&self, block: &ValueBlock) {
        if !self.validate_block(block) {
            return;
        }
        if let Err(e) = self.store.store_block(block) {
            tracing::error!(error = %e, "failed to store accepted ValueBlock");
            return;
        }
        self.pool.remove_included(&block.transactions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duo_crypto::{derive_public_key, generate_private_key};
    use duo_primitives::TimePoint;
    use duo_types::TimeBlock;
    use tempfile::tempdir;

    fn harness() -> (ValueChainConsensus, PrivateKey) {
        // `into_path()` disables the guard's automatic cleanup so the
        // directory survives past this helper, for the life of the test.
        let dir = tempdir().unwrap().into_path();
        let value_store = Arc::new(BlockStore::new(dir.join("value")));
        value_store.initialize().unwrap();
        let time_store = Arc::new(BlockStore::new(dir.join("time")));
        time_store.initialize().unwrap();

        let sk = generate_private_key();
        let pk = derive_public_key(&sk).unwrap();

        let mut genesis_time = TimeBlock::new(Hash::ZERO, TimePoint::from_nanos(1), pk);
        genesis_time.sign_with(&sk).unwrap();
        time_store.store_block(&genesis_time).unwrap();

        let time_view = TimeChainView::new(time_store);
        (
            ValueChainConsensus::new(value_store, time_view, pk, sk.clone()),
            sk,
        )
    }

    fn signed_tx(engine: &ValueChainConsensus, sk: &PrivateKey, amount: u64) -> Transaction {
        let mut tx = Transaction::new(engine.public_key, engine.public_key, amount, vec![]);
        tx.sign_with(sk).unwrap();
        tx
    }

    fn force_produce(engine: &ValueChainConsensus) -> ValueBlock {
        loop {
            if let Some(b) = engine.produce_block() {
                return b;
            }
        }
    }

    // ==================== Production ====================

    #[test]
    fn produce_returns_none_on_empty_pool() {
        let (engine, _sk) = harness();
        assert!(engine.produce_block().is_none());
    }

    #[test]
    fn produced_block_prepends_coinbase() {
        let (engine, sk) = harness();
        engine.add_transaction(signed_tx(&engine, &sk, 1));

        let block = force_produce(&engine);
        assert!(block.transactions[0].is_coinbase());
        assert_eq!(block.transactions[0].amount, COINBASE_AMOUNT);
        assert_eq!(block.transactions.len(), 2);
    }

    #[test]
    fn produced_block_anchors_to_time_chain_tip() {
        let (engine, sk) = harness();
        engine.add_transaction(signed_tx(&engine, &sk, 1));

        let block = force_produce(&engine);
        let tip = engine.time_chain.get_latest_block().unwrap().unwrap();
        assert_eq!(block.time_block_hash, tip.hash);
        assert_eq!(block.time, tip.time);
    }

    #[test]
    fn produce_drains_pool() {
        let (engine, sk) = harness();
        engine.add_transaction(signed_tx(&engine, &sk, 1));
        force_produce(&engine);
        assert_eq!(engine.pool.len(), 0);
    }

    // ==================== Validation ====================

    #[test]
    fn validate_rejects_unknown_anchor() {
        let (engine, sk) = harness();
        let tx = signed_tx(&engine, &sk, 1);
        let mut block = ValueBlock::new(
            Hash::ZERO,
            Hash::from_bytes([0x99; 32]),
            TimePoint::from_nanos(1),
            vec![tx],
            engine.public_key,
        );
        block.sign_with(&sk).unwrap();
        assert!(!engine.validate_block(&block));
    }

    #[test]
    fn validate_accepts_wellformed_block() {
        let (engine, sk) = harness();
        engine.add_transaction(signed_tx(&engine, &sk, 1));
        let block = force_produce(&engine);
        assert!(engine.validate_block(&block));
    }

    #[test]
    fn validate_rejects_tampered_transaction() {
        let (engine, sk) = harness();
        engine.add_transaction(signed_tx(&engine, &sk, 1));
        let mut block = force_produce(&engine);
        block.transactions[1].amount = 9_999;
        assert!(!engine.validate_block(&block));
    }

    // ==================== Handle ====================

    #[test]
    fn handle_block_removes_included_from_pool() {
        let (engine, sk) = harness();
        let tx = signed_tx(&engine, &sk, 1);
        engine.add_transaction(tx.clone());
        let produced = force_produce(&engine);

        engine.add_transaction(signed_tx(&engine, &sk, 2));
        engine.handle_block(&produced);

        // The leftover transaction (added after production) survives.
        assert_eq!(engine.pool.len(), 1);
    }
}
