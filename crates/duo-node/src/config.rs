//! Configuration types for duo-node: a `Cli` parse result lowered
//! into the values the orchestrator actually needs.

use crate::cli::{Cli, Role};
use std::path::PathBuf;

/// Node configuration, built from parsed CLI flags.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// TCP port for the peer manager's listener.
    pub port: u16,
    /// Whether this node produces TimeChain blocks.
    pub produces_time_chain: bool,
    /// Whether this node produces ValueChain blocks.
    pub produces_value_chain: bool,
    /// Root directory holding the `time_chain`/`value_chain` stores.
    pub datadir: PathBuf,
    /// `tracing` filter directive, e.g. `info` or `debug`.
    pub log_level: String,
    /// Peers to dial at startup, as `ip:port` strings.
    pub peers: Vec<String>,
}

impl NodeConfig {
    /// Directory for the TimeChain store.
    pub fn time_chain_dir(&self) -> PathBuf {
        self.datadir.join("time_chain")
    }

    /// Directory for the ValueChain store.
    pub fn value_chain_dir(&self) -> PathBuf {
        self.datadir.join("value_chain")
    }
}

impl From<Cli> for NodeConfig {
    fn from(cli: Cli) -> Self {
        let (produces_time_chain, produces_value_chain) = match cli.role {
            Role::Time => (true, false),
            Role::Value => (false, true),
            Role::Dual => (true, true),
        };

        NodeConfig {
            port: cli.port,
            produces_time_chain,
            produces_value_chain,
            datadir: cli.datadir,
            log_level: cli.log_level,
            peers: cli.peers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn dual_role_produces_both_chains() {
        let cli = Cli::parse_from(["duochain"]);
        let config = NodeConfig::from(cli);
        assert!(config.produces_time_chain);
        assert!(config.produces_value_chain);
    }

    #[test]
    fn time_role_produces_only_time_chain() {
        let cli = Cli::parse_from(["duochain", "--role", "time"]);
        let config = NodeConfig::from(cli);
        assert!(config.produces_time_chain);
        assert!(!config.produces_value_chain);
    }

    #[test]
    fn value_role_produces_only_value_chain() {
        let cli = Cli::parse_from(["duochain", "--role", "value"]);
        let config = NodeConfig::from(cli);
        assert!(!config.produces_time_chain);
        assert!(config.produces_value_chain);
    }

    #[test]
    fn store_dirs_are_rooted_under_datadir() {
        let cli = Cli::parse_from(["duochain", "--datadir", "/tmp/duo"]);
        let config = NodeConfig::from(cli);
        assert_eq!(config.time_chain_dir(), PathBuf::from("/tmp/duo/time_chain"));
        assert_eq!(config.value_chain_dir(), PathBuf::from("/tmp/duo/value_chain"));
    }
}
