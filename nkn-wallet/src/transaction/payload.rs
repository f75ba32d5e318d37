//! Typed transaction payloads

use prost::Message;

use crate::account::ProgramHash;
use crate::crypto::keys::PublicKey;
use crate::encoding::{write_u32_le, write_var_bytes};
use crate::error::{Error, Result};
use super::amount::Amount;
use super::types::{self, PayloadType};

/// A transaction payload
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Transfer(types::TransferAsset),
    RegisterName(types::RegisterName),
    DeleteName(types::DeleteName),
    Subscribe(types::Subscribe),
    Unsubscribe(types::Unsubscribe),
    NanoPay(types::NanoPay),
}

impl Payload {
    /// Ledger payload type
    pub fn payload_type(&self) -> PayloadType {
        match self {
            Payload::Transfer(_) => PayloadType::TransferAsset,
            Payload::RegisterName(_) => PayloadType::RegisterName,
            Payload::DeleteName(_) => PayloadType::DeleteName,
            Payload::Subscribe(_) => PayloadType::Subscribe,
            Payload::Unsubscribe(_) => PayloadType::Unsubscribe,
            Payload::NanoPay(_) => PayloadType::NanoPay,
        }
    }

    /// Protobuf encoding of the inner message
    pub fn data(&self) -> Vec<u8> {
        match self {
            Payload::Transfer(m) => m.encode_to_vec(),
            Payload::RegisterName(m) => m.encode_to_vec(),
            Payload::DeleteName(m) => m.encode_to_vec(),
            Payload::Subscribe(m) => m.encode_to_vec(),
            Payload::Unsubscribe(m) => m.encode_to_vec(),
            Payload::NanoPay(m) => m.encode_to_vec(),
        }
    }

    /// Wire message wrapping the type tag and data
    pub fn to_message(&self) -> types::Payload {
        types::Payload {
            r#type: self.payload_type() as i32,
            data: self.data(),
        }
    }

    /// Canonical form: `u32le(type) || var_bytes(data)`
    pub fn serialize(&self) -> Vec<u8> {
        let data = self.data();
        let mut out = Vec::with_capacity(data.len() + 8);
        write_u32_le(&mut out, self.payload_type() as u32);
        write_var_bytes(&mut out, &data);
        out
    }
}

/// Transfer `amount` from `sender` to `recipient`
pub fn new_transfer(sender: &ProgramHash, recipient: &ProgramHash, amount: Amount) -> Result<Payload> {
    Ok(Payload::Transfer(types::TransferAsset {
        sender: sender.as_bytes().to_vec(),
        recipient: recipient.as_bytes().to_vec(),
        amount: amount.units(),
    }))
}

/// Register `name` to `registrant`
pub fn new_register_name(registrant: &PublicKey, name: &str) -> Result<Payload> {
    require_non_empty("name", name)?;
    Ok(Payload::RegisterName(types::RegisterName {
        registrant: registrant.as_bytes().to_vec(),
        name: name.to_string(),
    }))
}

/// Delete `name` owned by `registrant`
pub fn new_delete_name(registrant: &PublicKey, name: &str) -> Result<Payload> {
    require_non_empty("name", name)?;
    Ok(Payload::DeleteName(types::DeleteName {
        registrant: registrant.as_bytes().to_vec(),
        name: name.to_string(),
    }))
}

/// Subscribe `identifier.subscriber` to `topic` for `duration` blocks
pub fn new_subscribe(
    subscriber: &PublicKey,
    identifier: &str,
    topic: &str,
    bucket: u32,
    duration: u32,
    meta: &str,
) -> Result<Payload> {
    require_non_empty("topic", topic)?;
    Ok(Payload::Subscribe(types::Subscribe {
        subscriber: subscriber.as_bytes().to_vec(),
        identifier: identifier.to_string(),
        topic: topic.to_string(),
        bucket,
        duration,
        meta: meta.to_string(),
    }))
}

/// Unsubscribe `identifier.subscriber` from `topic`
pub fn new_unsubscribe(subscriber: &PublicKey, identifier: &str, topic: &str) -> Result<Payload> {
    require_non_empty("topic", topic)?;
    Ok(Payload::Unsubscribe(types::Unsubscribe {
        subscriber: subscriber.as_bytes().to_vec(),
        identifier: identifier.to_string(),
        topic: topic.to_string(),
    }))
}

/// Conditional payment channel update
pub fn new_nano_pay(
    sender: &ProgramHash,
    recipient: &ProgramHash,
    id: u64,
    amount: Amount,
    txn_expiration: u32,
    nano_pay_expiration: u32,
) -> Result<Payload> {
    if nano_pay_expiration < txn_expiration {
        return Err(Error::InvalidArgument(format!(
            "nano pay expiration {} is before transaction expiration {}",
            nano_pay_expiration, txn_expiration
        )));
    }

    Ok(Payload::NanoPay(types::NanoPay {
        sender: sender.as_bytes().to_vec(),
        recipient: recipient.as_bytes().to_vec(),
        id,
        amount: amount.units(),
        txn_expiration,
        nano_pay_expiration,
    }))
}

fn require_non_empty(what: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidArgument(format!("{} must not be empty", what)));
    }
    Ok(())
}
