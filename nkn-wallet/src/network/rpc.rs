//! JSON-RPC 2.0 node client over HTTP

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::WalletConfig;
use crate::error::{Error, Result};
use super::client::NodeClient;

/// JSON-RPC request id sent with every call
const REQUEST_ID: &str = "nkn-wallet";

/// RPC method names
mod methods {
    pub const GET_NONCE_BY_ADDR: &str = "getnoncebyaddr";
    pub const GET_BALANCE_BY_ADDR: &str = "getbalancebyaddr";
    pub const GET_ADDRESS_BY_NAME: &str = "getaddressbyname";
    pub const SEND_RAW_TRANSACTION: &str = "sendrawtransaction";
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct NonceResult {
    #[serde(default)]
    nonce: Option<u64>,
    #[serde(rename = "nonceInTxPool", default)]
    nonce_in_tx_pool: Option<u64>,
}

/// Node client speaking JSON-RPC 2.0 over HTTP POST
#[derive(Debug, Clone)]
pub struct RpcClient {
    http: reqwest::Client,
    url: String,
}

impl RpcClient {
    /// Create a client for the configured endpoint
    pub fn new(config: &WalletConfig) -> Result<Self> {
        let url = config.rpc_server_addr.clone().ok_or(Error::NoRpcServer)?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| Error::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, url })
    }

    /// Endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn call(&self, method: &str, params: Value) -> Result<Value> {
        debug!(method, url = %self.url, "RPC call");

        let body = request_body(method, params);

        let response = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Network(format!("{} request failed: {}", method, e)))?;

        let value: Value = response
            .json()
            .await
            .map_err(|e| Error::InvalidResponse(format!("{} returned malformed JSON: {}", method, e)))?;

        parse_response(value)
    }
}

/// JSON-RPC 2.0 request envelope
pub(crate) fn request_body(method: &str, params: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": REQUEST_ID,
        "method": method,
        "params": params,
    })
}

fn address_params(address: &str) -> Value {
    json!({ "address": address })
}

fn name_params(name: &str) -> Value {
    json!({ "name": name })
}

fn tx_params(tx_hex: &str) -> Value {
    json!({ "tx": tx_hex })
}

/// Extract the result of a JSON-RPC response; a missing result becomes `Null`
pub(crate) fn parse_response(value: Value) -> Result<Value> {
    let response: RpcResponse = serde_json::from_value(value)
        .map_err(|e| Error::InvalidResponse(format!("not a JSON-RPC response: {}", e)))?;

    if let Some(error) = response.error {
        return Err(Error::ServerError {
            code: error.code,
            message: error.message,
        });
    }

    Ok(response.result.unwrap_or(Value::Null))
}

pub(crate) fn parse_nonce(result: Value) -> Result<u64> {
    let nonce: NonceResult = serde_json::from_value(result)
        .map_err(|e| Error::InvalidResponse(format!("bad nonce result: {}", e)))?;

    match (nonce.nonce, nonce.nonce_in_tx_pool) {
        (Some(a), Some(b)) => Ok(a.max(b)),
        (Some(n), None) | (None, Some(n)) => Ok(n),
        (None, None) => Err(Error::InvalidResponse("nonce missing from result".to_string())),
    }
}

pub(crate) fn parse_balance(result: Value) -> Result<Decimal> {
    let amount = match result {
        Value::Null => return Ok(Decimal::ZERO),
        Value::Object(mut map) => map.remove("amount").unwrap_or(Value::Null),
        other => {
            return Err(Error::InvalidResponse(format!("bad balance result: {}", other)));
        }
    };

    let parsed = match &amount {
        Value::Null => return Ok(Decimal::ZERO),
        Value::String(s) => parse_decimal(s.trim()),
        Value::Number(n) => parse_decimal(&n.to_string()),
        _ => return Err(Error::InvalidResponse(format!("bad balance amount: {}", amount))),
    };

    parsed.map_err(|e| Error::InvalidResponse(format!("bad balance amount {}: {}", amount, e)))
}

// Nodes may render small or large amounts in exponent form
fn parse_decimal(s: &str) -> std::result::Result<Decimal, rust_decimal::Error> {
    Decimal::from_str(s).or_else(|_| Decimal::from_scientific(s))
}

pub(crate) fn parse_address(result: Value) -> Result<Option<String>> {
    match result {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s)),
        other => Err(Error::InvalidResponse(format!("bad address result: {}", other))),
    }
}

pub(crate) fn parse_txn_hash(result: Value) -> Result<String> {
    match result {
        Value::String(s) if !s.is_empty() => Ok(s),
        other => Err(Error::InvalidResponse(format!("bad transaction hash: {}", other))),
    }
}

#[async_trait]
impl NodeClient for RpcClient {
    async fn get_nonce(&self, address: &str) -> Result<u64> {
        let result = self.call(methods::GET_NONCE_BY_ADDR, address_params(address)).await?;
        parse_nonce(result)
    }

    async fn get_balance(&self, address: &str) -> Result<Decimal> {
        let result = self.call(methods::GET_BALANCE_BY_ADDR, address_params(address)).await?;
        parse_balance(result)
    }

    async fn get_address_by_name(&self, name: &str) -> Result<Option<String>> {
        let result = self.call(methods::GET_ADDRESS_BY_NAME, name_params(name)).await?;
        parse_address(result)
    }

    async fn send_raw_transaction(&self, tx_hex: &str) -> Result<String> {
        let result = self.call(methods::SEND_RAW_TRANSACTION, tx_params(tx_hex)).await?;
        parse_txn_hash(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_endpoint() {
        assert!(matches!(RpcClient::new(&WalletConfig::disabled()), Err(Error::NoRpcServer)));

        let client = RpcClient::new(&WalletConfig::new("http://127.0.0.1:30003").with_timeout(3)).unwrap();
        assert_eq!(client.url(), "http://127.0.0.1:30003");
    }

    #[test]
    fn test_request_bodies() {
        assert_eq!(
            request_body(methods::GET_NONCE_BY_ADDR, address_params("NKNabc")),
            json!({
                "jsonrpc": "2.0",
                "id": "nkn-wallet",
                "method": "getnoncebyaddr",
                "params": { "address": "NKNabc" }
            })
        );
        assert_eq!(
            request_body(methods::GET_BALANCE_BY_ADDR, address_params("NKNabc"))["method"],
            "getbalancebyaddr"
        );

        let name = request_body(methods::GET_ADDRESS_BY_NAME, name_params("alice"));
        assert_eq!(name["method"], "getaddressbyname");
        assert_eq!(name["params"], json!({ "name": "alice" }));

        let send = request_body(methods::SEND_RAW_TRANSACTION, tx_params("0a1b"));
        assert_eq!(send["method"], "sendrawtransaction");
        assert_eq!(send["params"], json!({ "tx": "0a1b" }));
        assert_eq!(send["jsonrpc"], "2.0");
    }

    #[test]
    fn test_server_error() {
        let err = parse_response(json!({
            "jsonrpc": "2.0",
            "id": "nkn-wallet",
            "error": { "code": -45021, "message": "INTERNAL_ERROR" }
        }))
        .unwrap_err();

        match err {
            Error::ServerError { code, message } => {
                assert_eq!(code, -45021);
                assert_eq!(message, "INTERNAL_ERROR");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_response() {
        assert!(matches!(parse_response(json!([1, 2])), Err(Error::InvalidResponse(_))));
        assert!(matches!(parse_response(json!({ "result": 1 })), Ok(Value::Number(_))));
    }

    #[test]
    fn test_nonce_takes_pool_maximum() {
        assert_eq!(parse_nonce(json!({ "nonce": 3, "nonceInTxPool": 5 })).unwrap(), 5);
        assert_eq!(parse_nonce(json!({ "nonce": 8, "nonceInTxPool": 2 })).unwrap(), 8);
        assert_eq!(parse_nonce(json!({ "nonce": 4 })).unwrap(), 4);
        assert!(matches!(parse_nonce(json!({})), Err(Error::InvalidResponse(_))));
        assert!(matches!(parse_nonce(Value::Null), Err(Error::InvalidResponse(_))));
    }

    #[test]
    fn test_balance_parsing() {
        assert_eq!(parse_balance(json!({ "amount": "12.5" })).unwrap(), Decimal::from_str("12.5").unwrap());
        assert_eq!(parse_balance(json!({ "amount": 3 })).unwrap(), Decimal::from(3));
        assert_eq!(parse_balance(Value::Null).unwrap(), Decimal::ZERO);
        assert_eq!(parse_balance(json!({})).unwrap(), Decimal::ZERO);
        assert!(matches!(parse_balance(json!({ "amount": "lots" })), Err(Error::InvalidResponse(_))));
        assert!(matches!(parse_balance(json!("12")), Err(Error::InvalidResponse(_))));
    }

    #[test]
    fn test_balance_exponent_form() {
        assert_eq!(parse_balance(json!({ "amount": 1e-8 })).unwrap(), Decimal::new(1, 8));
        assert_eq!(parse_balance(json!({ "amount": "1.5e3" })).unwrap(), Decimal::from(1500));
        assert_eq!(parse_balance(json!({ "amount": 2.5e21 })).unwrap(), Decimal::from_str("2500000000000000000000").unwrap());
    }

    #[test]
    fn test_address_and_hash_parsing() {
        assert_eq!(parse_address(json!("NKNabc")).unwrap().as_deref(), Some("NKNabc"));
        assert_eq!(parse_address(json!("")).unwrap(), None);
        assert_eq!(parse_address(Value::Null).unwrap(), None);
        assert!(matches!(parse_address(json!(5)), Err(Error::InvalidResponse(_))));

        assert_eq!(parse_txn_hash(json!("ab12")).unwrap(), "ab12");
        assert!(matches!(parse_txn_hash(Value::Null), Err(Error::InvalidResponse(_))));
    }
}
