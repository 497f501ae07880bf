//! Node orchestration: wires the stores, consensus engines, peer
//! manager, and production loops together, and drives startup and
//! shutdown.

use crate::config::NodeConfig;
use crate::consensus_driver::ConsensusDriver;
use crate::genesis;
use duo_consensus::{TimeChainConsensus, ValueChainConsensus};
use duo_crypto::{derive_public_key, generate_private_key};
use duo_network::PeerManager;
use duo_storage::{BlockStore, TimeChainView};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;

/// Number of times `connect_to_peer` is retried before a configured
/// peer is given up on for this startup.
const PEER_CONNECT_RETRIES: u32 = 5;

/// Delay between connection retries to a single configured peer.
const PEER_CONNECT_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Node error types. Every variant here is a startup failure — the
/// only class of error this crate lets propagate out of `run`.
#[derive(Debug, Error)]
pub enum NodeError {
    /// A store directory could not be created or opened.
    #[error("storage initialization failed: {0}")]
    Storage(#[from] duo_storage::StorageError),
    /// The embedded genesis blob failed to decode or verify.
    #[error("genesis initialization failed: {0}")]
    Genesis(#[from] crate::genesis::GenesisError),
    /// The peer manager failed to bind its listening port.
    #[error("network initialization failed: {0}")]
    Network(#[from] duo_network::NetworkError),
    /// This node's own key pair failed to derive.
    #[error("key derivation failed: {0}")]
    Key(#[from] duo_crypto::CryptoError),
}

/// Result type for node startup/run operations.
pub type NodeResult<T> = Result<T, NodeError>;

/// A running DuoChain node: the two chain stores, the peer manager,
/// and whichever production loops this node's role enables.
pub struct Node {
    network: Arc<PeerManager>,
    driver: Arc<ConsensusDriver>,
    config: NodeConfig,
    shutdown: Arc<AtomicBool>,
}

impl Node {
    /// Construct every component: key pair, stores, genesis load,
    /// consensus engines, and the peer manager (not yet listening).
    pub fn new(config: NodeConfig) -> NodeResult<Self> {
        let private_key = generate_private_key();
        let public_key = derive_public_key(&private_key)?;

        let time_store = Arc::new(BlockStore::new(config.time_chain_dir()));
        time_store.initialize()?;
        let value_store = Arc::new(BlockStore::new(config.value_chain_dir()));
        value_store.initialize()?;

        let time_chain = Arc::new(TimeChainConsensus::new(
            Arc::clone(&time_store),
            public_key,
            private_key.clone(),
        ));
        genesis::initialize_time_chain(&time_chain)?;

        let time_view = TimeChainView::new(Arc::clone(&time_store));
        let value_chain = Arc::new(ValueChainConsensus::new(
            value_store,
            time_view,
            public_key,
            private_key.clone(),
        ));
        genesis::initialize_value_chain(&value_chain)?;

        let network = Arc::new(PeerManager::new());
        let driver = Arc::new(ConsensusDriver::new(
            Arc::clone(&network),
            time_chain,
            value_chain,
            public_key,
            private_key,
        ));

        Ok(Node {
            network,
            driver,
            config,
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Start the listener, dial configured peers, install the receive
    /// callback, launch the enabled production loops, and block until
    /// shutdown is requested.
    pub async fn run(&self) -> NodeResult<()> {
        self.network.start(self.config.port).await?;

        {
            let driver = Arc::clone(&self.driver);
            self.network.set_receive_callback(Arc::new(move |ip, bytes| {
                driver.on_receive(ip, bytes);
            }));
        }

        for peer in &self.config.peers {
            self.connect_with_retry(peer).await;
        }

        let mut loops: Vec<JoinHandle<()>> = Vec::new();
        if self.config.produces_time_chain {
            loops.push(Arc::clone(&self.driver).spawn_time_chain_loop());
        }
        if self.config.produces_value_chain {
            loops.push(Arc::clone(&self.driver).spawn_value_chain_loop());
        }

        while !self.shutdown.load(Ordering::Relaxed) {
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        for handle in loops {
            handle.abort();
        }
        self.network.stop();
        Ok(())
    }

    /// A clonable handle a signal handler can use to request shutdown.
    pub fn shutdown_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    async fn connect_with_retry(&self, peer: &str) {
        let Some((ip, port_str)) = peer.rsplit_once(':') else {
            tracing::warn!(peer, "ignoring malformed peer address, expected ip:port");
            return;
        };
        let Ok(port) = port_str.parse::<u16>() else {
            tracing::warn!(peer, "ignoring malformed peer port");
            return;
        };

        for attempt in 1..=PEER_CONNECT_RETRIES {
            match self.network.connect_to_peer(ip, port).await {
                Ok(()) => {
                    tracing::info!(peer, attempt, "connected to peer");
                    return;
                }
                Err(e) => {
                    tracing::warn!(peer, attempt, error = %e, "peer connection attempt failed");
                    if attempt < PEER_CONNECT_RETRIES {
                        tokio::time::sleep(PEER_CONNECT_RETRY_DELAY).await;
                    }
                }
            }
        }
        tracing::error!(peer, "giving up on peer after {PEER_CONNECT_RETRIES} attempts");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(datadir: PathBuf, port: u16) -> NodeConfig {
        NodeConfig {
            port,
            produces_time_chain: true,
            produces_value_chain: true,
            datadir,
            log_level: "info".to_string(),
            peers: vec![],
        }
    }

    #[test]
    fn new_node_loads_genesis_into_empty_stores() {
        let dir = tempfile::tempdir().unwrap().into_path();
        let node = Node::new(config(dir, 0)).unwrap();
        assert!(!node.shutdown.load(Ordering::Relaxed));
    }

    #[tokio::test]
    async fn run_exits_promptly_once_shutdown_flag_is_set() {
        let dir = tempfile::tempdir().unwrap().into_path();
        let node = Node::new(config(dir, 0)).unwrap();
        let shutdown = node.shutdown_handle();

        let run_handle = tokio::spawn(async move { node.run().await });
        shutdown.store(true, Ordering::Relaxed);

        let result = tokio::time::timeout(Duration::from_secs(2), run_handle)
            .await
            .expect("run() should return promptly after shutdown is requested")
            .unwrap();
        assert!(result.is_ok());
    }

    #[test]
    fn malformed_peer_address_is_ignored_not_panicking() {
        let dir = tempfile::tempdir().unwrap().into_path();
        let node = Node::new(config(dir, 0)).unwrap();
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(node.connect_with_retry("not-an-address"));
    }
}
