//! # duo-txpool
//!
//! The ValueChain's pending-transaction pool: a mutex-protected
//! ordered sequence with no validation or dedup at insertion time —
//! that is left to the ValueChain consensus engine, at block
//! production and block acceptance.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod pool;

pub use pool::TxPool;
