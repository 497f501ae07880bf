//! Wire framing, dispatch, and the two production loops.
//!
//! Frame layout: `[length: u32 BE][type: u8][payload]`, where `length`
//! counts the type byte plus the payload. Message types:
//!
//! - `0x01` TimeBlock announcement: `sender_public_key(32) ‖ serialize(TimeBlock)`
//! - `0x02` ValueBlock announcement: `sender_public_key(32) ‖ serialize(ValueBlock)`
//! - `0x03` Transaction gossip: `serialize(Transaction)`
//!
//! Inbound bytes arrive unframed off a raw socket read, one chunk at
//! a time, so each peer gets a reassembly buffer: append, then peel
//! off as many complete frames as are available before waiting for
//! more bytes.

use bytes::Bytes;
use duo_consensus::{TimeChainConsensus, ValueChainConsensus};
use duo_network::PeerManager;
use duo_primitives::{PrivateKey, PublicKey};
use duo_types::{Transaction, TimeBlock, ValueBlock, MIN_TRANSACTION_SIZE};
use parking_lot::Mutex;
use rand::RngCore;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

const TIME_BLOCK_ANNOUNCE: u8 = 0x01;
const VALUE_BLOCK_ANNOUNCE: u8 = 0x02;
const TRANSACTION_GOSSIP: u8 = 0x03;

/// Amount transferred by the ValueChain's periodic self-transaction.
const GENERATED_TRANSFER_AMOUNT: u64 = 10;

const TIME_CHAIN_TICK: Duration = Duration::from_secs(1);
const VALUE_CHAIN_TICK: Duration = Duration::from_secs(5);

/// Frame `payload` (which already starts with the type byte) for the
/// wire: a big-endian `u32` length prefix counting `payload.len()`.
fn frame(message_type: u8, body: &[u8]) -> Bytes {
    let mut out = Vec::with_capacity(4 + 1 + body.len());
    let length = 1u32 + body.len() as u32;
    out.extend_from_slice(&length.to_be_bytes());
    out.push(message_type);
    out.extend_from_slice(body);
    Bytes::from(out)
}

/// Glues the peer manager's raw byte stream to the two consensus
/// engines: reassembles frames per peer, dispatches by message type,
/// and drives the TimeChain/ValueChain production loops.
pub struct ConsensusDriver {
    network: Arc<PeerManager>,
    time_chain: Arc<TimeChainConsensus>,
    value_chain: Arc<ValueChainConsensus>,
    public_key: PublicKey,
    private_key: PrivateKey,
    buffers: Mutex<HashMap<String, Vec<u8>>>,
}

impl ConsensusDriver {
    /// Build a driver around the node's own key pair, its two
    /// consensus engines, and the peer manager it will install a
    /// receive callback on.
    pub fn new(
        network: Arc<PeerManager>,
        time_chain: Arc<TimeChainConsensus>,
        value_chain: Arc<ValueChainConsensus>,
        public_key: PublicKey,
        private_key: PrivateKey,
    ) -> Self {
        ConsensusDriver {
            network,
            time_chain,
            value_chain,
            public_key,
            private_key,
            buffers: Mutex::new(HashMap::new()),
        }
    }

    /// Append `bytes` to `peer`'s reassembly buffer and dispatch every
    /// complete frame it now contains.
    pub fn on_receive(self: &Arc<Self>, peer: String, bytes: Vec<u8>) {
        let mut frames = Vec::new();
        {
            let mut buffers = self.buffers.lock();
            let buf = buffers.entry(peer).or_default();
            buf.extend_from_slice(&bytes);

            loop {
                if buf.len() < 4 {
                    break;
                }
                let length = u32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]]) as usize;
                if buf.len() < 4 + length {
                    break;
                }
                let frame_bytes = buf[4..4 + length].to_vec();
                buf.drain(..4 + length);
                frames.push(frame_bytes);
            }
        }

        for frame_bytes in frames {
            self.dispatch(&frame_bytes);
        }
    }

    /// `frame_bytes` is `[type][payload]`, with the length prefix
    /// already stripped off by `on_receive`.
    fn dispatch(&self, frame_bytes: &[u8]) {
        let Some((&message_type, payload)) = frame_bytes.split_first() else {
            tracing::warn!("dropping empty frame");
            return;
        };

        match message_type {
            TIME_BLOCK_ANNOUNCE => {
                if payload.len() < 32 {
                    tracing::warn!("dropping truncated TimeBlock announcement");
                    return;
                }
                match TimeBlock::deserialize(&payload[32..]) {
                    Ok(block) => self.time_chain.handle_block(&block),
                    Err(e) => tracing::warn!(error = %e, "dropping malformed TimeBlock"),
                }
            }
            VALUE_BLOCK_ANNOUNCE => {
                if payload.len() < 32 {
                    tracing::warn!("dropping truncated ValueBlock announcement");
                    return;
                }
                match ValueBlock::deserialize(&payload[32..]) {
                    Ok(block) => self.value_chain.handle_block(&block),
                    Err(e) => tracing::warn!(error = %e, "dropping malformed ValueBlock"),
                }
            }
            TRANSACTION_GOSSIP => {
                if payload.len() < MIN_TRANSACTION_SIZE {
                    tracing::warn!("dropping undersized transaction");
                    return;
                }
                match Transaction::deserialize(payload) {
                    Ok(tx) => self.value_chain.add_transaction(tx),
                    Err(e) => tracing::warn!(error = %e, "dropping malformed transaction"),
                }
            }
            other => {
                tracing::warn!(message_type = other, "dropping unknown message type");
            }
        }
    }

    /// Build, sign, pool, and broadcast a self-to-random-recipient
    /// transfer. Run once per ValueChain tick before production, so
    /// the chain always has something to include.
    fn generate_and_broadcast_transaction(&self) {
        let mut recipient_bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut recipient_bytes);
        let recipient = PublicKey::from_bytes(recipient_bytes);

        let mut tx = Transaction::new(self.public_key, recipient, GENERATED_TRANSFER_AMOUNT, Vec::new());
        if let Err(e) = tx.sign_with(&self.private_key) {
            tracing::error!(error = %e, "failed to sign generated transaction");
            return;
        }

        self.value_chain.add_transaction(tx.clone());
        self.network
            .broadcast_data(frame(TRANSACTION_GOSSIP, &tx.serialize()));
    }

    /// Every `TIME_CHAIN_TICK`, attempt production and broadcast a new
    /// tip if one was produced. Produced blocks are announced here,
    /// not replayed through `dispatch` — production and receipt are
    /// independent paths.
    pub fn spawn_time_chain_loop(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(TIME_CHAIN_TICK);
            loop {
                ticker.tick().await;
                if let Some(block) = self.time_chain.produce_block() {
                    let mut body = Vec::with_capacity(32 + 168);
                    body.extend_from_slice(self.public_key.as_ref());
                    body.extend_from_slice(&block.serialize());
                    self.network.broadcast_data(frame(TIME_BLOCK_ANNOUNCE, &body));
                }
            }
        })
    }

    /// Every `VALUE_CHAIN_TICK`: generate and broadcast a self-transfer,
    /// then attempt production and broadcast a new tip if one resulted.
    pub fn spawn_value_chain_loop(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(VALUE_CHAIN_TICK);
            loop {
                ticker.tick().await;
                self.generate_and_broadcast_transaction();

                if let Some(block) = self.value_chain.produce_block() {
                    let mut body = Vec::new();
                    body.extend_from_slice(self.public_key.as_ref());
                    body.extend_from_slice(&block.serialize());
                    self.network.broadcast_data(frame(VALUE_BLOCK_ANNOUNCE, &body));
                }
            }
        })
    }
}
