//! Thin, read-only façades over a `BlockStore`, handed to components
//! that need to inspect a chain without being able to mutate it
//! (mutation flows through the owning consensus engine instead).

use crate::error::StorageResult;
use crate::store::BlockStore;
use duo_primitives::Hash;
use duo_types::{TimeBlock, ValueBlock};
use std::sync::Arc;

/// Read-only view over a TimeChain store.
#[derive(Clone)]
pub struct TimeChainView {
    store: Arc<BlockStore<TimeBlock>>,
}

impl TimeChainView {
    /// Wrap a store handle.
    pub fn new(store: Arc<BlockStore<TimeBlock>>) -> Self {
        TimeChainView { store }
    }

    /// The chain's current tip, if any has been stored.
    pub fn get_latest_block(&self) -> StorageResult<Option<TimeBlock>> {
        self.store.get_latest_block()
    }

    /// The tip's hash, or `Hash::ZERO` if the chain is empty.
    pub fn get_latest_block_hash(&self) -> StorageResult<Hash> {
        Ok(self
            .store
            .get_latest_block()?
            .map(|b| b.hash)
            .unwrap_or(Hash::ZERO))
    }

    /// True if a block with this hash has been stored.
    pub fn block_exists(&self, hash: &Hash) -> StorageResult<bool> {
        self.store.block_exists(hash)
    }
}

/// Read-only view over a ValueChain store.
#[derive(Clone)]
pub struct ValueChainView {
    store: Arc<BlockStore<ValueBlock>>,
}

impl ValueChainView {
    /// Wrap a store handle.
    pub fn new(store: Arc<BlockStore<ValueBlock>>) -> Self {
        ValueChainView { store }
    }

    /// The chain's current tip, if any has been stored.
    pub fn get_latest_block(&self) -> StorageResult<Option<ValueBlock>> {
        self.store.get_latest_block()
    }

    /// The tip's hash, or `Hash::ZERO` if the chain is empty.
    pub fn get_latest_block_hash(&self) -> StorageResult<Hash> {
        Ok(self
            .store
            .get_latest_block()?
            .map(|b| b.hash)
            .unwrap_or(Hash::ZERO))
    }

    /// True if a block with this hash has been stored.
    pub fn block_exists(&self, hash: &Hash) -> StorageResult<bool> {
        self.store.block_exists(hash)
    }

    /// Look up an arbitrary ValueBlock by hash.
    pub fn get_block(&self, hash: &Hash) -> StorageResult<Option<ValueBlock>> {
        self.store.get_block(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duo_crypto::{derive_public_key, generate_private_key};
    use duo_primitives::TimePoint;
    use tempfile::tempdir;

    #[test]
    fn empty_view_reports_zero_hash() {
        let dir = tempdir().unwrap();
        let store = Arc::new(BlockStore::new(dir.path()));
        store.initialize().unwrap();
        let view = TimeChainView::new(store);
        assert_eq!(view.get_latest_block_hash().unwrap(), Hash::ZERO);
        assert!(view.get_latest_block().unwrap().is_none());
    }

    #[test]
    fn view_reflects_stored_tip() {
        let dir = tempdir().unwrap();
        let store = Arc::new(BlockStore::new(dir.path()));
        store.initialize().unwrap();

        let sk = generate_private_key();
        let pk = derive_public_key(&sk).unwrap();
        let mut block = TimeBlock::new(Hash::ZERO, TimePoint::from_nanos(1), pk);
        block.sign_with(&sk).unwrap();
        store.store_block(&block).unwrap();

        let view = TimeChainView::new(store);
        assert_eq!(view.get_latest_block_hash().unwrap(), block.hash);
        assert!(view.block_exists(&block.hash).unwrap());
    }
}
