//! Seed-based key pair derivation

use std::fmt;

use ed25519_dalek::SigningKey;

use crate::crypto::hash::{decode_hex_array, random_array};
use crate::error::Result;
use super::ed25519;

/// Seed length in bytes
pub const SEED_LENGTH: usize = 32;

/// Public key length in bytes
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Private key length in bytes (seed followed by public key)
pub const PRIVATE_KEY_LENGTH: usize = 64;

/// Detached signature length in bytes
pub const SIGNATURE_LENGTH: usize = 64;

/// An ed25519 public key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_LENGTH]);

impl PublicKey {
    /// Create a public key from raw bytes
    pub fn new(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Get the raw public key bytes
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }

    /// Lowercase hex encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// An ed25519 private key in the 64-byte `seed || public key` layout
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey([u8; PRIVATE_KEY_LENGTH]);

impl PrivateKey {
    /// Get the raw private key bytes
    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_LENGTH] {
        &self.0
    }

    /// Lowercase hex encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

/// A key pair derived from a 32-byte seed
#[derive(Clone)]
pub struct KeyPair {
    signing_key: SigningKey,
    public_key: PublicKey,
}

impl KeyPair {
    /// Derive a key pair from a random seed
    pub fn generate() -> Self {
        Self::from_seed(&random_array::<SEED_LENGTH>())
    }

    /// Derive a key pair from a seed
    pub fn from_seed(seed: &[u8; SEED_LENGTH]) -> Self {
        let signing_key = ed25519::signing_key_from_seed(seed);
        let public_key = PublicKey::new(signing_key.verifying_key().to_bytes());
        Self { signing_key, public_key }
    }

    /// Derive a key pair from a hex-encoded seed
    pub fn from_seed_hex(seed: &str) -> Result<Self> {
        let seed = decode_hex_array::<SEED_LENGTH>("seed", seed)?;
        Ok(Self::from_seed(&seed))
    }

    /// Get the seed
    pub fn seed(&self) -> [u8; SEED_LENGTH] {
        self.signing_key.to_bytes()
    }

    /// Get the public key
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Get the private key
    pub fn private_key(&self) -> PrivateKey {
        PrivateKey(self.signing_key.to_keypair_bytes())
    }

    /// Sign a message with a detached, fixed-length signature
    pub fn sign(&self, message: &[u8]) -> Result<[u8; SIGNATURE_LENGTH]> {
        ed25519::sign_detached(&self.signing_key, message)
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key.to_hex())
            .finish_non_exhaustive()
    }
}

/// Derive a key pair from an optional hex seed; a random seed is used when none is given
pub fn derive_key_pair(seed: Option<&str>) -> Result<KeyPair> {
    match seed {
        Some(seed) => KeyPair::from_seed_hex(seed),
        None => Ok(KeyPair::generate()),
    }
}
