//! Envelope encryption of the wallet seed.
//!
//! Two AES-256-CBC layers without padding protect the seed:
//!
//! | Layer       | Plaintext  | Key                       |
//! |-------------|------------|---------------------------|
//! | master key  | master key | SHA256(SHA256(password))  |
//! | seed        | seed       | master key                |
//!
//! Both layers use the same IV, and `SHA256(SHA256(SHA256(password)))` is
//! stored to check the password before decrypting. This is the layout of
//! existing NKN wallet files and must not change.

use aes::Aes256;
use cbc::cipher::{block_padding::NoPadding, BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::crypto::hash::{double_sha256, random_array, sha256};
use crate::crypto::keys::SEED_LENGTH;
use crate::error::{Error, Result};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// AES block and IV size in bytes
pub const IV_LENGTH: usize = 16;

/// Master key size in bytes
pub const MASTER_KEY_LENGTH: usize = 32;

/// Generate a random IV
pub fn gen_iv() -> [u8; IV_LENGTH] {
    random_array()
}

/// Generate a random master key
pub fn gen_master_key() -> [u8; MASTER_KEY_LENGTH] {
    random_array()
}

/// Derive the AES key protecting the master key from a password
pub fn password_key(password: &str) -> [u8; 32] {
    double_sha256(password.as_bytes())
}

/// Hex digest stored in the wallet file to check a password
pub fn password_hash(password: &str) -> String {
    hex::encode(sha256(&password_key(password)))
}

/// AES-256-CBC encrypt without padding; `plaintext` must be block aligned
pub fn encrypt(plaintext: &[u8], key: &[u8; 32], iv: &[u8; IV_LENGTH]) -> Result<Vec<u8>> {
    let mut buffer = plaintext.to_vec();
    let cipher = Aes256CbcEnc::new_from_slices(key, iv)
        .map_err(|e| Error::Crypto(format!("Invalid AES key or IV: {}", e)))?;
    let len = cipher
        .encrypt_padded_mut::<NoPadding>(&mut buffer, plaintext.len())
        .map_err(|_| Error::Crypto(format!("plaintext of {} bytes is not block aligned", plaintext.len())))?
        .len();
    buffer.truncate(len);
    Ok(buffer)
}

/// AES-256-CBC decrypt without padding; `ciphertext` must be block aligned
pub fn decrypt(ciphertext: &[u8], key: &[u8; 32], iv: &[u8; IV_LENGTH]) -> Result<Vec<u8>> {
    let mut buffer = ciphertext.to_vec();
    let cipher = Aes256CbcDec::new_from_slices(key, iv)
        .map_err(|e| Error::Crypto(format!("Invalid AES key or IV: {}", e)))?;
    let len = cipher
        .decrypt_padded_mut::<NoPadding>(&mut buffer)
        .map_err(|_| Error::Crypto(format!("ciphertext of {} bytes is not block aligned", ciphertext.len())))?
        .len();
    buffer.truncate(len);
    Ok(buffer)
}

/// The encrypted form of a seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Stored password check (hex)
    pub password_hash: String,
    /// IV shared by both layers
    pub iv: [u8; IV_LENGTH],
    /// Master key encrypted under the password key
    pub encrypted_master_key: Vec<u8>,
    /// Seed encrypted under the master key
    pub encrypted_seed: Vec<u8>,
}

/// Decrypted contents of an envelope
pub struct OpenedEnvelope {
    /// The master key
    pub master_key: [u8; MASTER_KEY_LENGTH],
    /// The seed
    pub seed: [u8; SEED_LENGTH],
}

impl Envelope {
    /// Seal a seed under a password with a fresh master key and IV
    pub fn seal(seed: &[u8; SEED_LENGTH], password: &str) -> Result<Self> {
        Self::seal_with(seed, password, &gen_master_key(), &gen_iv())
    }

    /// Seal a seed reusing an existing master key and IV
    pub fn seal_with(
        seed: &[u8; SEED_LENGTH],
        password: &str,
        master_key: &[u8; MASTER_KEY_LENGTH],
        iv: &[u8; IV_LENGTH],
    ) -> Result<Self> {
        let key = password_key(password);
        Ok(Self {
            password_hash: hex::encode(sha256(&key)),
            iv: *iv,
            encrypted_master_key: encrypt(master_key, &key, iv)?,
            encrypted_seed: encrypt(seed, master_key, iv)?,
        })
    }

    /// Check a password against the stored hash
    pub fn verify_password(&self, password: &str) -> bool {
        self.password_hash.eq_ignore_ascii_case(&password_hash(password))
    }

    /// Decrypt the master key and seed
    pub fn open(&self, password: &str) -> Result<OpenedEnvelope> {
        if !self.verify_password(password) {
            return Err(Error::WrongPassword);
        }

        let master_key: [u8; MASTER_KEY_LENGTH] =
            open_layer(&self.encrypted_master_key, &password_key(password), &self.iv, "master key")?;
        let seed: [u8; SEED_LENGTH] = open_layer(&self.encrypted_seed, &master_key, &self.iv, "seed")?;

        Ok(OpenedEnvelope { master_key, seed })
    }
}

fn open_layer<const N: usize>(
    ciphertext: &[u8],
    key: &[u8; 32],
    iv: &[u8; IV_LENGTH],
    what: &str,
) -> Result<[u8; N]> {
    if ciphertext.len() != N {
        return Err(Error::InvalidWalletFormat(format!(
            "encrypted {} must be {} bytes, got {}",
            what,
            N,
            ciphertext.len()
        )));
    }

    let plaintext = decrypt(ciphertext, key, iv)?;
    plaintext
        .as_slice()
        .try_into()
        .map_err(|_| Error::Crypto(format!("decrypted {} has wrong length", what)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv() -> [u8; IV_LENGTH] {
        let mut iv = [0u8; IV_LENGTH];
        for (i, b) in iv.iter_mut().enumerate() {
            *b = i as u8;
        }
        iv
    }

    fn seed() -> [u8; SEED_LENGTH] {
        let mut seed = [0u8; SEED_LENGTH];
        for (i, b) in seed.iter_mut().enumerate() {
            *b = i as u8;
        }
        seed
    }

    #[test]
    fn test_password_hash_vector() {
        assert_eq!(
            hex::encode(password_key("pswd")),
            "0523d457e3ed9d803691f10c37a01361a8fb1a8392596ca059734d6cabe7dadc"
        );
        assert_eq!(
            password_hash("pswd"),
            "8296bbf9920bb5d4598feaa64a9c10474a7058073318284a2fb8c7725bdcc30f"
        );
    }

    #[test]
    fn test_seal_vector() {
        let envelope = Envelope::seal_with(&seed(), "pswd", &[0x42; 32], &iv()).unwrap();

        assert_eq!(
            hex::encode(&envelope.encrypted_master_key),
            "dd650365b6701e1ed488e95f298cc901e2102b9b364c817496bd3a316090e9bd"
        );
        assert_eq!(
            hex::encode(&envelope.encrypted_seed),
            "bfb6d89c222a66f0fff7def5b86b3a2f6cdac60eee74c4b416235cf72d280739"
        );
    }

    #[test]
    fn test_seal_open_roundtrip() {
        let envelope = Envelope::seal(&seed(), "correct horse").unwrap();
        let opened = envelope.open("correct horse").unwrap();

        assert_eq!(opened.seed, seed());
        assert_eq!(envelope.encrypted_seed.len(), SEED_LENGTH);
        assert_eq!(envelope.encrypted_master_key.len(), MASTER_KEY_LENGTH);
    }

    #[test]
    fn test_wrong_password() {
        let envelope = Envelope::seal(&seed(), "right").unwrap();
        assert!(!envelope.verify_password("wrong"));
        assert!(matches!(envelope.open("wrong"), Err(Error::WrongPassword)));
    }

    #[test]
    fn test_fresh_envelopes_differ() {
        let a = Envelope::seal(&seed(), "pw").unwrap();
        let b = Envelope::seal(&seed(), "pw").unwrap();
        assert_ne!(a.encrypted_seed, b.encrypted_seed);
        assert_eq!(a.password_hash, b.password_hash);
    }

    #[test]
    fn test_unaligned_plaintext_rejected() {
        let key = [1u8; 32];
        assert!(matches!(encrypt(&[0u8; 15], &key, &iv()), Err(Error::Crypto(_))));
        assert!(matches!(decrypt(&[0u8; 17], &key, &iv()), Err(Error::Crypto(_))));
    }

    #[test]
    fn test_truncated_ciphertext_is_format_error() {
        let mut envelope = Envelope::seal(&seed(), "pw").unwrap();
        envelope.encrypted_seed.truncate(16);
        assert!(matches!(envelope.open("pw"), Err(Error::InvalidWalletFormat(_))));
    }
}
