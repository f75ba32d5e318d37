//! Account: one key pair and everything derived from it

use crate::crypto::keys::{KeyPair, PrivateKey, PublicKey, SEED_LENGTH, SIGNATURE_LENGTH};
use crate::error::Result;
use super::address::ProgramHash;
use super::program::{contract_data, program_hash, signature_redeem_script, REDEEM_SCRIPT_LENGTH};

/// A single-signer ledger account.
///
/// All derived values are computed once at construction; an `Account` never
/// changes afterwards.
#[derive(Debug, Clone)]
pub struct Account {
    key_pair: KeyPair,
    redeem_script: [u8; REDEEM_SCRIPT_LENGTH],
    program_hash: ProgramHash,
    address: String,
    contract: Vec<u8>,
}

impl Account {
    /// Create an account with a random seed
    pub fn new() -> Result<Self> {
        Self::from_key_pair(KeyPair::generate())
    }

    /// Restore an account from a hex-encoded seed
    pub fn restore(seed: &str) -> Result<Self> {
        Self::from_key_pair(KeyPair::from_seed_hex(seed)?)
    }

    /// Restore an account from raw seed bytes
    pub fn from_seed(seed: &[u8; SEED_LENGTH]) -> Result<Self> {
        Self::from_key_pair(KeyPair::from_seed(seed))
    }

    fn from_key_pair(key_pair: KeyPair) -> Result<Self> {
        let redeem_script = signature_redeem_script(key_pair.public_key());
        let program_hash = program_hash(&redeem_script);
        let contract = contract_data(&redeem_script, &program_hash)?;

        Ok(Self {
            address: program_hash.to_address(),
            key_pair,
            redeem_script,
            program_hash,
            contract,
        })
    }

    /// Base58 address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Program hash of the signature redeem script
    pub fn program_hash(&self) -> &ProgramHash {
        &self.program_hash
    }

    /// Ed25519 public key
    pub fn public_key(&self) -> &PublicKey {
        self.key_pair.public_key()
    }

    /// Private key (seed followed by public key)
    pub fn private_key(&self) -> PrivateKey {
        self.key_pair.private_key()
    }

    /// 32-byte seed the key pair is derived from
    pub fn seed(&self) -> [u8; SEED_LENGTH] {
        self.key_pair.seed()
    }

    /// Signature redeem script (`0x20 || public key || 0xAC`)
    pub fn redeem_script(&self) -> &[u8; REDEEM_SCRIPT_LENGTH] {
        &self.redeem_script
    }

    /// Contract data stored alongside the wallet
    pub fn contract(&self) -> &[u8] {
        &self.contract
    }

    /// Hex-encoded contract data
    pub fn contract_string(&self) -> String {
        hex::encode(&self.contract)
    }

    /// Sign a message with the account key
    pub fn sign(&self, message: &[u8]) -> Result<[u8; SIGNATURE_LENGTH]> {
        self.key_pair.sign(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::address::address_to_program_hash;
    use crate::error::Error;

    #[test]
    fn test_restore_known_seed() {
        let account =
            Account::restore("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f").unwrap();

        assert_eq!(
            account.public_key().to_hex(),
            "03a107bff3ce10be1d70dd18e74bc09967e4d6309ba50d5f1ddc8664125531b8"
        );
        assert_eq!(account.program_hash().to_hex(), "beaa02163ce75e2a48afe24636e0055330bab537");
        assert_eq!(account.address(), "NKNUsF4WiVqFqfDUiZ8zcrsmvVs1tLrbeKYZ");
        assert_eq!(
            account.contract_string(),
            "222003a107bff3ce10be1d70dd18e74bc09967e4d6309ba50d5f1ddc8664125531b8ac00beaa02163ce75e2a48afe24636e0055330bab537"
        );
    }

    #[test]
    fn test_new_account_is_consistent() {
        let account = Account::new().unwrap();
        let restored = Account::from_seed(&account.seed()).unwrap();

        assert_eq!(restored.address(), account.address());
        assert_eq!(address_to_program_hash(account.address()).unwrap(), *account.program_hash());
        assert_eq!(&account.private_key().as_bytes()[32..], account.public_key().as_bytes());
    }

    #[test]
    fn test_restore_rejects_bad_seed() {
        assert!(matches!(Account::restore("abc"), Err(Error::InvalidArgument(_))));
        assert!(matches!(Account::restore(&"00".repeat(31)), Err(Error::InvalidArgument(_))));
    }
}
