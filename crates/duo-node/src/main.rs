//! DuoChain node binary.
//!
//! This is the main entry point for running a DuoChain node.

mod cli;
mod config;
mod consensus_driver;
mod genesis;
mod genesis_data;
mod node;

use cli::Cli;
use config::NodeConfig;
use node::Node;
use std::sync::atomic::Ordering;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let config = NodeConfig::from(cli);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .init();

    let node = Node::new(config)?;

    let shutdown = node.shutdown_handle();
    tokio::spawn(async move {
        wait_for_shutdown_signal().await;
        shutdown.store(true, Ordering::Relaxed);
    });

    node.run().await?;
    Ok(())
}

/// Waits for SIGINT, or SIGTERM on Unix. Each iteration of the
/// production loops finishes before the run loop observes the flag
/// this sets — no in-flight block production is cancelled mid-way.
async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    tracing::info!("shutdown signal received");
}
