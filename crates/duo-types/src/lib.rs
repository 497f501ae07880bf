//! # duo-types
//!
//! The deterministic wire/on-disk codec for DuoChain's two chains:
//! `TimeBlock` (TimeChain), `ValueBlock` and `Transaction` (ValueChain).
//! Every type exposes `serialize`/`deserialize`, `data_to_sign`, and
//! `compute_hash`, matching the shared codec capability set these
//! three entities implement.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod layout;
mod time_block;
mod transaction;
mod value_block;

pub use error::CodecError;
pub use time_block::{TimeBlock, TIME_BLOCK_SIZE};
pub use transaction::{Transaction, MIN_TRANSACTION_SIZE};
pub use value_block::ValueBlock;
