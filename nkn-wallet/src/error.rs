//! Error types for the nkn-wallet library

use rust_decimal::Decimal;
use thiserror::Error;

/// Custom error type for nkn-wallet operations
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed caller input (seed hex, payload fields, amounts)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Address failed to decode or its checksum does not match
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Password does not match the wallet
    #[error("Wrong password")]
    WrongPassword,

    /// Persisted wallet is missing fields or has wrong-typed fields
    #[error("Invalid wallet format: {0}")]
    InvalidWalletFormat(String),

    /// Persisted wallet version is outside the supported range
    #[error("Invalid wallet version {version}, supported range is [{min}, {max}]")]
    InvalidWalletVersion {
        /// Version found in the wallet file
        version: i128,
        /// Lowest readable version
        min: u32,
        /// Highest readable version
        max: u32,
    },

    /// Balance is below the requested amount
    #[error("Not enough balance: have {balance}, need {amount}")]
    NotEnoughBalance {
        /// Balance reported by the node
        balance: Decimal,
        /// Requested amount
        amount: Decimal,
    },

    /// Node answered with something that is not the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Node answered with an error object
    #[error("Server error {code}: {message}")]
    ServerError {
        /// JSON-RPC error code
        code: i64,
        /// Error message from the node
        message: String,
    },

    /// Network operation attempted without a configured endpoint
    #[error("No RPC server configured")]
    NoRpcServer,

    /// Transport failure reaching the node
    #[error("Network error: {0}")]
    Network(String),

    /// Internal signing, hashing or encryption failure
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Result type for nkn-wallet operations
pub type Result<T> = std::result::Result<T, Error>;
