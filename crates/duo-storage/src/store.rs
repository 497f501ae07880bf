//! Content-addressed, mutex-protected file store, generic over block
//! type: one file per block named `<hex(hash)>.block`, plus a
//! `latest.block` pointer file copied to the current tip after every
//! successful write. There is no fork logic — `store_block` always
//! overwrites the pointer; producers and validators must only call it
//! for the intended new tip.

use crate::error::StorageResult;
use crate::traits::StoredBlock;
use duo_primitives::Hash;
use parking_lot::Mutex;
use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

const LATEST_FILE: &str = "latest.block";

/// A per-chain block store. All operations serialize through a
/// single internal mutex, matching the source's single-writer
/// contract for both reads and writes.
pub struct BlockStore<B> {
    dir: PathBuf,
    lock: Mutex<()>,
    _block: PhantomData<B>,
}

impl<B: StoredBlock> BlockStore<B> {
    /// Open a store rooted at `dir`, without touching the filesystem yet.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        BlockStore {
            dir: dir.into(),
            lock: Mutex::new(()),
            _block: PhantomData,
        }
    }

    /// Create the store directory if it does not already exist.
    pub fn initialize(&self) -> StorageResult<()> {
        let _guard = self.lock.lock();
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    /// Persist `block`, keyed by its own hash, and overwrite the
    /// `latest.block` pointer to point at it.
    pub fn store_block(&self, block: &B) -> StorageResult<()> {
        let _guard = self.lock.lock();
        let bytes = block.encode();
        fs::write(self.block_path(&block.block_hash()), &bytes)?;
        fs::write(self.latest_path(), &bytes)?;
        Ok(())
    }

    /// Load the block named `hash.block`, if present.
    pub fn get_block(&self, hash: &Hash) -> StorageResult<Option<B>> {
        let _guard = self.lock.lock();
        Self::read_optional(&self.block_path(hash))
    }

    /// Load the block `latest.block` points at. `None` means an
    /// empty chain (no genesis stored yet).
    pub fn get_latest_block(&self) -> StorageResult<Option<B>> {
        let _guard = self.lock.lock();
        Self::read_optional(&self.latest_path())
    }

    /// True if a block file named `hash.block` exists.
    pub fn block_exists(&self, hash: &Hash) -> StorageResult<bool> {
        let _guard = self.lock.lock();
        Ok(self.block_path(hash).is_file())
    }

    /// No-op: a flat-file store holds no persistent file handles to
    /// release between operations. Kept to preserve the store
    /// contract's symmetry with `initialize`.
    pub fn close(&self) -> StorageResult<()> {
        Ok(())
    }

    fn block_path(&self, hash: &Hash) -> PathBuf {
        self.dir.join(format!("{}.block", hash.to_hex()))
    }

    fn latest_path(&self) -> PathBuf {
        self.dir.join(LATEST_FILE)
    }

    fn read_optional(path: &Path) -> StorageResult<Option<B>> {
        match fs::read(path) {
            Ok(bytes) => Ok(Some(B::decode(&bytes)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
