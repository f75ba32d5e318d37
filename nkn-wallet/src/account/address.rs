//! Address codec
//!
//! An NKN address is the Base58 (Bitcoin alphabet) encoding of
//! `prefix || program hash || checksum`, where the checksum is the first four
//! bytes of `SHA256(SHA256(prefix || program hash))`.

use std::fmt;

use crate::crypto::hash::{decode_hex_array, double_sha256};
use crate::error::{Error, Result};

/// Program hash length in bytes
pub const PROGRAM_HASH_LENGTH: usize = 20;

/// Version prefix; makes every address start with `NKN`
pub const ADDRESS_PREFIX: [u8; 3] = [0x02, 0xb8, 0x25];

/// Checksum length in bytes
pub const CHECKSUM_LENGTH: usize = 4;

/// Decoded address length in bytes
pub const ADDRESS_LENGTH: usize = ADDRESS_PREFIX.len() + PROGRAM_HASH_LENGTH + CHECKSUM_LENGTH;

/// RIPEMD160(SHA256(redeem script)), the on-ledger identity of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHash([u8; PROGRAM_HASH_LENGTH]);

impl ProgramHash {
    /// Create a program hash from raw bytes
    pub fn new(bytes: [u8; PROGRAM_HASH_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Parse a hex-encoded program hash
    pub fn from_hex(value: &str) -> Result<Self> {
        Ok(Self(decode_hex_array("program hash", value)?))
    }

    /// Parse a program hash from a byte slice of exactly 20 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        bytes.try_into().map(Self).map_err(|_| {
            Error::InvalidArgument(format!(
                "program hash must be {} bytes, got {}",
                PROGRAM_HASH_LENGTH,
                bytes.len()
            ))
        })
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; PROGRAM_HASH_LENGTH] {
        &self.0
    }

    /// Lowercase hex encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Base58 address for this program hash
    pub fn to_address(&self) -> String {
        program_hash_to_address(self)
    }
}

impl fmt::Display for ProgramHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Checksum over the prefixed program hash
pub fn address_checksum(program_hash: &ProgramHash) -> [u8; CHECKSUM_LENGTH] {
    let digest = double_sha256(&prefixed(program_hash));
    let mut checksum = [0u8; CHECKSUM_LENGTH];
    checksum.copy_from_slice(&digest[..CHECKSUM_LENGTH]);
    checksum
}

/// Encode a program hash as a Base58 address
pub fn program_hash_to_address(program_hash: &ProgramHash) -> String {
    let mut data = prefixed(program_hash);
    data.extend_from_slice(&address_checksum(program_hash));
    bs58::encode(data).into_string()
}

/// Decode a Base58 address back to its program hash.
///
/// Fails with [`Error::InvalidAddress`] when the string is not Base58, has the
/// wrong decoded length, carries another prefix or has a bad checksum.
pub fn address_to_program_hash(address: &str) -> Result<ProgramHash> {
    let data = bs58::decode(address)
        .into_vec()
        .map_err(|e| Error::InvalidAddress(format!("{}: {}", address, e)))?;

    if data.len() != ADDRESS_LENGTH {
        return Err(Error::InvalidAddress(format!(
            "{}: decoded length {} is not {}",
            address,
            data.len(),
            ADDRESS_LENGTH
        )));
    }

    let (prefix, rest) = data.split_at(ADDRESS_PREFIX.len());
    if prefix != ADDRESS_PREFIX {
        return Err(Error::InvalidAddress(format!("{}: unknown prefix", address)));
    }

    let (hash, checksum) = rest.split_at(PROGRAM_HASH_LENGTH);
    let program_hash = ProgramHash::from_slice(hash)?;
    if checksum != address_checksum(&program_hash) {
        return Err(Error::InvalidAddress(format!("{}: checksum mismatch", address)));
    }

    Ok(program_hash)
}

/// Check whether a string is a well-formed NKN address
pub fn verify_address(address: &str) -> bool {
    address_to_program_hash(address).is_ok()
}

fn prefixed(program_hash: &ProgramHash) -> Vec<u8> {
    let mut data = Vec::with_capacity(ADDRESS_LENGTH);
    data.extend_from_slice(&ADDRESS_PREFIX);
    data.extend_from_slice(program_hash.as_bytes());
    data
}
