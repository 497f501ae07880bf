//! # duo-consensus
//!
//! Consensus for DuoChain's two chains.
//!
//! This crate provides:
//! - `TimeChainConsensus` — heartbeat block production and validation
//! - `ValueChainConsensus` — transaction pool plus signed-block
//!   production anchored to the TimeChain

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod time_chain;
mod value_chain;

pub use error::{ConsensusError, ConsensusResult};
pub use time_chain::TimeChainConsensus;
pub use value_chain::ValueChainConsensus;
