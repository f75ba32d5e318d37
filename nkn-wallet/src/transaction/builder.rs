//! Unsigned transaction preimage, signing and wire serialization

use prost::Message;

use crate::account::Account;
use crate::crypto::hash::sha256;
use crate::crypto::keys::{ed25519, PublicKey, SIGNATURE_LENGTH};
use crate::encoding::{write_u64_le, write_var_bytes};
use crate::error::Result;
use super::amount::Amount;
use super::payload::Payload;
use super::types;

/// Type tag prepended to a signature in a program parameter
pub const SIGNATURE_PARAMETER_PREFIX: u8 = 0x40;

/// A transaction before signing
#[derive(Debug, Clone, PartialEq)]
pub struct UnsignedTransaction {
    pub payload: Payload,
    pub nonce: u64,
    pub fee: Amount,
    pub attributes: Vec<u8>,
}

impl UnsignedTransaction {
    /// Canonical preimage:
    /// `payload || u64le(nonce) || u64le(fee) || var_bytes(attributes)`
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = self.payload.serialize();
        write_u64_le(&mut out, self.nonce);
        write_u64_le(&mut out, self.fee.units() as u64);
        write_var_bytes(&mut out, &self.attributes);
        out
    }

    /// SHA-256 of the preimage; this is what gets signed
    pub fn digest(&self) -> [u8; 32] {
        sha256(&self.serialize())
    }

    fn to_message(&self) -> types::UnsignedTx {
        types::UnsignedTx {
            payload: Some(self.payload.to_message()),
            nonce: self.nonce,
            fee: self.fee.units(),
            attributes: self.attributes.clone(),
        }
    }
}

/// A signed transaction
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    unsigned: UnsignedTransaction,
    programs: Vec<types::Program>,
}

impl Transaction {
    /// Unsigned part covered by the signature
    pub fn unsigned(&self) -> &UnsignedTransaction {
        &self.unsigned
    }

    /// Signature programs, one per signer
    pub fn programs(&self) -> &[types::Program] {
        &self.programs
    }

    /// Nonce of the unsigned part
    pub fn nonce(&self) -> u64 {
        self.unsigned.nonce
    }

    /// Transaction id, the SHA-256 of the unsigned preimage
    pub fn hash(&self) -> [u8; 32] {
        self.unsigned.digest()
    }

    /// Hex transaction id
    pub fn hash_hex(&self) -> String {
        hex::encode(self.hash())
    }

    /// Protobuf message submitted to nodes
    pub fn to_message(&self) -> types::Transaction {
        types::Transaction {
            unsigned_tx: Some(self.unsigned.to_message()),
            programs: self.programs.clone(),
        }
    }

    /// Protobuf wire bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_message().encode_to_vec()
    }

    /// Hex wire bytes, the form accepted by `sendrawtransaction`
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Check every program signature against `public_key`
    pub fn verify(&self, public_key: &PublicKey) -> bool {
        let digest = self.hash();
        !self.programs.is_empty()
            && self.programs.iter().all(|program| {
                match program.parameter.split_first() {
                    Some((&SIGNATURE_PARAMETER_PREFIX, signature)) => {
                        ed25519::verify(public_key, &digest, signature)
                    }
                    _ => false,
                }
            })
    }
}

/// Wrap a signature as a program parameter
pub fn signature_to_parameter(signature: &[u8; SIGNATURE_LENGTH]) -> Vec<u8> {
    let mut parameter = Vec::with_capacity(SIGNATURE_LENGTH + 1);
    parameter.push(SIGNATURE_PARAMETER_PREFIX);
    parameter.extend_from_slice(signature);
    parameter
}

/// Build and sign a single-signer transaction
pub fn build_transaction(
    account: &Account,
    payload: Payload,
    nonce: u64,
    fee: Amount,
    attributes: &[u8],
) -> Result<Transaction> {
    let unsigned = UnsignedTransaction {
        payload,
        nonce,
        fee,
        attributes: attributes.to_vec(),
    };

    let signature = account.sign(&unsigned.digest())?;
    let program = types::Program {
        code: account.redeem_script().to_vec(),
        parameter: signature_to_parameter(&signature),
    };

    Ok(Transaction {
        unsigned,
        programs: vec![program],
    })
}
