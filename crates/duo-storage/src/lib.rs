//! # duo-storage
//!
//! Content-addressed flat-file storage for DuoChain's two chains.
//!
//! This crate provides:
//! - A generic `BlockStore<B>`, keyed by block hash, plus a `latest.block`
//!   tip pointer (no fork logic — callers decide what counts as the tip)
//! - `StoredBlock`, the small codec capability a block type needs to be
//!   stored
//! - Read-only chain views (`TimeChainView`, `ValueChainView`) for
//!   components that should not be able to write

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod store;
mod traits;
mod views;

pub use error::{StorageError, StorageResult};
pub use store::BlockStore;
pub use traits::StoredBlock;
pub use views::{TimeChainView, ValueChainView};
