//! Node client interface

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::Result;

/// Queries and submissions the wallet needs from a node
#[async_trait]
pub trait NodeClient: Send + Sync {
    /// Next usable nonce for an address, including pending pool transactions
    async fn get_nonce(&self, address: &str) -> Result<u64>;

    /// Balance in NKN; an address with no funds reports zero
    async fn get_balance(&self, address: &str) -> Result<Decimal>;

    /// Address a name is registered to, if any
    async fn get_address_by_name(&self, name: &str) -> Result<Option<String>>;

    /// Submit hex wire bytes, returning the transaction hash
    async fn send_raw_transaction(&self, tx_hex: &str) -> Result<String>;
}
