//! NKN Wallet Core
//!
//! Client-side wallet library for the NKN ledger: seed-based ed25519 key
//! derivation, the Base58 address codec, password-encrypted wallet files, and
//! building, signing and submitting transactions through a node client.

pub mod error;
pub mod config;
pub mod crypto;
pub mod encoding;
pub mod account;
pub mod transaction;
pub mod network;

// Re-export commonly used types for convenience
pub use account::{Account, TransactionOptions, Wallet, WalletFile};
pub use config::WalletConfig;
pub use error::{Error, Result};
pub use network::{NodeClient, RpcClient};
pub use transaction::{Amount, Payload, Transaction};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
