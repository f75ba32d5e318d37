//! Remote node configuration
//!
//! Each [`Wallet`](crate::account::Wallet) holds its own `WalletConfig`, so
//! wallets in one process may talk to different nodes.
//!
//! ```bash
//! export NKN_RPC_SERVER_ADDR="http://127.0.0.1:30003"
//! export NKN_RPC_TIMEOUT_SECS=10
//! ```

use serde::{Deserialize, Serialize};

/// Public seed node used when nothing else is configured
pub const DEFAULT_RPC_SERVER_ADDR: &str = "http://seed.nkn.org:30003";

/// Environment variable names
mod env_vars {
    pub const RPC_SERVER_ADDR: &str = "NKN_RPC_SERVER_ADDR";
    pub const RPC_TIMEOUT_SECS: &str = "NKN_RPC_TIMEOUT_SECS";
}

/// Remote node endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConfig {
    /// JSON-RPC endpoint; `None` disables network operations
    pub rpc_server_addr: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            rpc_server_addr: Some(DEFAULT_RPC_SERVER_ADDR.to_string()),
            timeout_secs: None,
        }
    }
}

impl WalletConfig {
    /// Config for a single endpoint
    pub fn new(rpc_server_addr: impl Into<String>) -> Self {
        Self {
            rpc_server_addr: Some(rpc_server_addr.into()),
            timeout_secs: None,
        }
    }

    /// Config with no endpoint; network operations fail with `NoRpcServer`
    pub fn disabled() -> Self {
        Self {
            rpc_server_addr: None,
            timeout_secs: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Create config from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(addr) = lookup(env_vars::RPC_SERVER_ADDR).filter(|addr| !addr.trim().is_empty()) {
            tracing::debug!("Using {} for RPC server", env_vars::RPC_SERVER_ADDR);
            config.rpc_server_addr = Some(addr.trim().to_string());
        }

        if let Some(raw) = lookup(env_vars::RPC_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => config.timeout_secs = Some(secs),
                Err(_) => tracing::warn!(value = %raw, "Ignoring invalid {}", env_vars::RPC_TIMEOUT_SECS),
            }
        }

        config
    }
}
