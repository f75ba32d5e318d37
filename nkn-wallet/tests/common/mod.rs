//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use prost::Message;
use rust_decimal::Decimal;

use nkn_wallet::crypto::hash::sha256;
use nkn_wallet::crypto::keys::{ed25519, PublicKey};
use nkn_wallet::encoding::{write_u32_le, write_u64_le, write_var_bytes};
use nkn_wallet::transaction::types;
use nkn_wallet::{NodeClient, Result};

pub const ZERO_SEED: &str = "0000000000000000000000000000000000000000000000000000000000000000";
pub const ZERO_SEED_ADDRESS: &str = "NKNXxspYy3QjABFqZYFBHBz3jUHiBhz54KAn";
pub const OTHER_ADDRESS: &str = "NKNUsF4WiVqFqfDUiZ8zcrsmvVs1tLrbeKYZ";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// In-memory node that records every submission
pub struct MockNodeClient {
    pub balance: Decimal,
    pub nonce: u64,
    pub names: Vec<(String, String)>,
    pub submitted: Mutex<Vec<String>>,
}

impl MockNodeClient {
    pub fn with_balance(balance: i64) -> Self {
        Self {
            balance: Decimal::from(balance),
            nonce: 0,
            names: Vec::new(),
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn submissions(&self) -> Vec<String> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl NodeClient for MockNodeClient {
    async fn get_nonce(&self, _address: &str) -> Result<u64> {
        Ok(self.nonce)
    }

    async fn get_balance(&self, _address: &str) -> Result<Decimal> {
        Ok(self.balance)
    }

    async fn get_address_by_name(&self, name: &str) -> Result<Option<String>> {
        Ok(self
            .names
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, address)| address.clone()))
    }

    async fn send_raw_transaction(&self, tx_hex: &str) -> Result<String> {
        let mut submitted = self.submitted.lock().unwrap();
        submitted.push(tx_hex.to_string());
        Ok(format!("txn-{}", submitted.len()))
    }
}

/// Decode submitted hex wire bytes
pub fn decode_transaction(tx_hex: &str) -> types::Transaction {
    types::Transaction::decode(hex::decode(tx_hex).unwrap().as_slice()).unwrap()
}

/// Rebuild the signing preimage from a decoded wire transaction
pub fn preimage(txn: &types::Transaction) -> Vec<u8> {
    let unsigned = txn.unsigned_tx.as_ref().unwrap();
    let payload = unsigned.payload.as_ref().unwrap();

    let mut out = Vec::new();
    write_u32_le(&mut out, payload.r#type as u32);
    write_var_bytes(&mut out, &payload.data);
    write_u64_le(&mut out, unsigned.nonce);
    write_u64_le(&mut out, unsigned.fee as u64);
    write_var_bytes(&mut out, &unsigned.attributes);
    out
}

/// Verify the single program signature of a decoded wire transaction
pub fn verify_wire_signature(txn: &types::Transaction, public_key: &PublicKey) -> bool {
    let program = &txn.programs[0];
    txn.programs.len() == 1
        && program.parameter[0] == 0x40
        && ed25519::verify(public_key, &sha256(&preimage(txn)), &program.parameter[1..])
}
