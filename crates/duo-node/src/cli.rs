//! CLI argument parsing for duo-node

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which production loops this node runs.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// TimeChain production only.
    Time,
    /// ValueChain production only.
    Value,
    /// Both TimeChain and ValueChain production.
    Dual,
}

/// DuoChain node: a peer in the TimeChain/ValueChain network.
#[derive(Parser, Debug, Clone)]
#[command(name = "duochain")]
#[command(about = "DuoChain blockchain node")]
#[command(version)]
pub struct Cli {
    /// TCP port this node listens on for peer connections.
    #[arg(long, default_value_t = 8001)]
    pub port: u16,

    /// Which chains this node produces blocks for.
    #[arg(long, value_enum, default_value_t = Role::Dual)]
    pub role: Role,

    /// Data directory for the TimeChain/ValueChain stores.
    #[arg(long, default_value = "./data")]
    pub datadir: PathBuf,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Peer address to dial at startup, as `ip:port`. May be repeated.
    #[arg(long = "peer")]
    pub peers: Vec<String>,
}

impl Cli {
    /// Parse CLI arguments, exiting the process on a malformed flag.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec() {
        let cli = Cli::parse_from(["duochain"]);
        assert_eq!(cli.port, 8001);
        assert_eq!(cli.role, Role::Dual);
        assert_eq!(cli.datadir, PathBuf::from("./data"));
        assert_eq!(cli.log_level, "info");
        assert!(cli.peers.is_empty());
    }

    #[test]
    fn custom_values_parse() {
        let cli = Cli::parse_from([
            "duochain",
            "--port", "9001",
            "--role", "time",
            "--datadir", "/tmp/duochain",
            "--log-level", "debug",
            "--peer", "127.0.0.1:8002",
            "--peer", "127.0.0.1:8003",
        ]);
        assert_eq!(cli.port, 9001);
        assert_eq!(cli.role, Role::Time);
        assert_eq!(cli.datadir, PathBuf::from("/tmp/duochain"));
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.peers, vec!["127.0.0.1:8002", "127.0.0.1:8003"]);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let result = Cli::try_parse_from(["duochain", "--bogus-flag", "1"]);
        assert!(result.is_err());
    }
}
