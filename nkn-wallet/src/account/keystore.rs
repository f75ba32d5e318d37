//! Persisted wallet file format
//!
//! ```json
//! {"Version":1,"PasswordHash":"..","MasterKey":"..","IV":"..","SeedEncrypted":"..",
//!  "Address":"NKN..","ProgramHash":"..","ContractData":".."}
//! ```
//!
//! Binary fields are written as lowercase hex. A loaded file is kept as read,
//! so its own hex case and absent optional fields survive re-serialization.
//! The raw seed and private key are never stored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::crypto::encryption::{Envelope, IV_LENGTH};
use crate::error::{Error, Result};
use super::identity::Account;

/// Version written by this library
pub const WALLET_VERSION: u32 = 1;

/// Oldest readable wallet version
pub const MIN_COMPATIBLE_WALLET_VERSION: u32 = 1;

/// Newest readable wallet version
pub const MAX_COMPATIBLE_WALLET_VERSION: u32 = 1;

/// Wallet file contents, field order matching the JSON layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WalletFile {
    pub version: u32,
    pub password_hash: String,
    pub master_key: String,
    #[serde(rename = "IV")]
    pub iv: String,
    pub seed_encrypted: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_data: Option<String>,
}

impl WalletFile {
    /// Wallet file for an account sealed in `envelope`
    pub fn new(account: &Account, envelope: &Envelope) -> Self {
        Self {
            version: WALLET_VERSION,
            password_hash: envelope.password_hash.clone(),
            master_key: hex::encode(&envelope.encrypted_master_key),
            iv: hex::encode(envelope.iv),
            seed_encrypted: hex::encode(&envelope.encrypted_seed),
            address: account.address().to_string(),
            program_hash: Some(account.program_hash().to_hex()),
            contract_data: Some(account.contract_string()),
        }
    }

    /// Parse and validate wallet JSON.
    ///
    /// The version is checked before anything else. `MasterKey`, `IV`,
    /// `SeedEncrypted` and `Address` must be strings; a missing
    /// `PasswordHash` reads as empty and never matches a password.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| Error::InvalidWalletFormat(format!("not valid JSON: {}", e)))?;
        let Value::Object(fields) = value else {
            return Err(Error::InvalidWalletFormat("wallet is not a JSON object".to_string()));
        };

        let version = check_version(&fields)?;

        Ok(Self {
            version,
            password_hash: optional_string(&fields, "PasswordHash")?.unwrap_or_default(),
            master_key: required_string(&fields, "MasterKey")?,
            iv: required_string(&fields, "IV")?,
            seed_encrypted: required_string(&fields, "SeedEncrypted")?,
            address: required_string(&fields, "Address")?,
            program_hash: optional_string(&fields, "ProgramHash")?,
            contract_data: optional_string(&fields, "ContractData")?,
        })
    }

    /// Compact JSON encoding
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode the encrypted fields
    pub fn envelope(&self) -> Result<Envelope> {
        let iv: [u8; IV_LENGTH] = decode_field("IV", &self.iv)?
            .as_slice()
            .try_into()
            .map_err(|_| Error::InvalidWalletFormat(format!("IV must be {} bytes", IV_LENGTH)))?;

        Ok(Envelope {
            password_hash: self.password_hash.clone(),
            iv,
            encrypted_master_key: decode_field("MasterKey", &self.master_key)?,
            encrypted_seed: decode_field("SeedEncrypted", &self.seed_encrypted)?,
        })
    }
}

fn check_version(fields: &Map<String, Value>) -> Result<u32> {
    let version = fields
        .get("Version")
        .and_then(|v| v.as_i64().map(i128::from).or_else(|| v.as_u64().map(i128::from)))
        .ok_or_else(|| Error::InvalidWalletFormat("Version must be an integer".to_string()))?;

    u32::try_from(version)
        .ok()
        .filter(|v| (MIN_COMPATIBLE_WALLET_VERSION..=MAX_COMPATIBLE_WALLET_VERSION).contains(v))
        .ok_or(Error::InvalidWalletVersion {
            version,
            min: MIN_COMPATIBLE_WALLET_VERSION,
            max: MAX_COMPATIBLE_WALLET_VERSION,
        })
}

fn required_string(fields: &Map<String, Value>, key: &str) -> Result<String> {
    match fields.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(Error::InvalidWalletFormat(format!("{} must be a string", key))),
        None => Err(Error::InvalidWalletFormat(format!("{} is missing", key))),
    }
}

fn optional_string(fields: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    match fields.get(key) {
        Some(Value::String(s)) => Ok(Some(s.clone())),
        None | Some(Value::Null) => Ok(None),
        Some(_) => Err(Error::InvalidWalletFormat(format!("{} must be a string", key))),
    }
}

fn decode_field(key: &str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value).map_err(|e| Error::InvalidWalletFormat(format!("{} is not valid hex: {}", key, e)))
}
