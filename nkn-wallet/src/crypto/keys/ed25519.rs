//! Ed25519 primitives backing NKN key pairs

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};

use crate::error::{Error, Result};
use super::derivation::{PublicKey, SEED_LENGTH, SIGNATURE_LENGTH};

/// Build the ed25519 signing key for a 32-byte seed
pub fn signing_key_from_seed(seed: &[u8; SEED_LENGTH]) -> SigningKey {
    SigningKey::from_bytes(seed)
}

/// Produce a detached signature over `message`
pub fn sign_detached(signing_key: &SigningKey, message: &[u8]) -> Result<[u8; SIGNATURE_LENGTH]> {
    let signature: Signature = signing_key.sign(message);
    pad_signature(&signature.to_bytes())
}

/// Verify a detached signature against a public key
pub fn verify(public_key: &PublicKey, message: &[u8], signature: &[u8]) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_bytes(public_key.as_bytes()) else {
        return false;
    };
    let Ok(signature) = pad_signature(signature) else {
        return false;
    };
    verifying_key
        .verify(message, &Signature::from_bytes(&signature))
        .is_ok()
}

/// Left-pad a signature with zero bytes to the fixed 64-byte length.
///
/// Signatures longer than 64 bytes are rejected.
pub fn pad_signature(signature: &[u8]) -> Result<[u8; SIGNATURE_LENGTH]> {
    if signature.len() > SIGNATURE_LENGTH {
        return Err(Error::Crypto(format!(
            "signature is {} bytes, expected at most {}",
            signature.len(),
            SIGNATURE_LENGTH
        )));
    }

    let mut padded = [0u8; SIGNATURE_LENGTH];
    padded[SIGNATURE_LENGTH - signature.len()..].copy_from_slice(signature);
    Ok(padded)
}
