//! Signature redeem scripts and account contracts

use crate::crypto::hash::hash160;
use crate::crypto::keys::{PublicKey, PUBLIC_KEY_LENGTH};
use crate::error::{Error, Result};
use super::address::ProgramHash;

/// Push-32 marker opening a signature redeem script
pub const PUSH_PUBLIC_KEY: u8 = 0x20;

/// CHECKSIG opcode closing a signature redeem script
pub const CHECKSIG: u8 = 0xac;

/// Length of a single-key redeem script
pub const REDEEM_SCRIPT_LENGTH: usize = PUBLIC_KEY_LENGTH + 2;

/// `0x20 || public key || 0xAC`
pub fn signature_redeem_script(public_key: &PublicKey) -> [u8; REDEEM_SCRIPT_LENGTH] {
    let mut script = [0u8; REDEEM_SCRIPT_LENGTH];
    script[0] = PUSH_PUBLIC_KEY;
    script[1..=PUBLIC_KEY_LENGTH].copy_from_slice(public_key.as_bytes());
    script[REDEEM_SCRIPT_LENGTH - 1] = CHECKSIG;
    script
}

/// Program hash of a redeem script
pub fn program_hash(redeem_script: &[u8]) -> ProgramHash {
    ProgramHash::new(hash160(redeem_script))
}

/// Prefix data with its byte count.
///
/// Empty data encodes as a single `0x00`; contract fields never exceed one
/// count byte.
pub fn prefix_byte_count(data: &[u8]) -> Result<Vec<u8>> {
    let count = u8::try_from(data.len())
        .ok()
        .filter(|count| *count < 0xfd)
        .ok_or_else(|| Error::InvalidArgument(format!("contract field of {} bytes is too long", data.len())))?;

    let mut out = Vec::with_capacity(data.len() + 1);
    out.push(count);
    out.extend_from_slice(data);
    Ok(out)
}

/// Contract data: `prefixed(redeem script) || prefixed(empty) || program hash`
pub fn contract_data(redeem_script: &[u8], program_hash: &ProgramHash) -> Result<Vec<u8>> {
    let mut contract = prefix_byte_count(redeem_script)?;
    contract.extend(prefix_byte_count(&[])?);
    contract.extend_from_slice(program_hash.as_bytes());
    Ok(contract)
}
