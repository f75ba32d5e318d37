//! Hash primitives and byte helpers

use rand::{rngs::OsRng, RngCore};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// SHA-256 of `data`
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// SHA-256 applied twice
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// RIPEMD-160 of `data`
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(data).into()
}

/// RIPEMD-160 over SHA-256, the program hash function
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// Fill a fixed-size array from the OS random source
pub fn random_array<const N: usize>() -> [u8; N] {
    let mut out = [0u8; N];
    OsRng.fill_bytes(&mut out);
    out
}

/// Random unsigned 64-bit integer
pub fn random_u64() -> u64 {
    OsRng.next_u64()
}

/// Decode a hex string, reporting failures as `InvalidArgument`
pub fn decode_hex(what: &str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value).map_err(|e| Error::InvalidArgument(format!("{} is not valid hex: {}", what, e)))
}

/// Decode a hex string that must be exactly `N` bytes long
pub fn decode_hex_array<const N: usize>(what: &str, value: &str) -> Result<[u8; N]> {
    let bytes = decode_hex(what, value)?;
    bytes.as_slice().try_into().map_err(|_| {
        Error::InvalidArgument(format!("{} must be {} bytes, got {}", what, N, bytes.len()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_double_sha256_is_sha256_twice() {
        let once = sha256(b"nkn");
        assert_eq!(double_sha256(b"nkn"), sha256(&once));
    }

    #[test]
    fn test_ripemd160_empty() {
        assert_eq!(hex::encode(ripemd160(b"")), "9c1185a5c5e9fc54612808977ee8f548b2258d31");
    }

    #[test]
    fn test_hash160_composition() {
        let data = b"redeem";
        assert_eq!(hash160(data), ripemd160(&sha256(data)));
    }

    #[test]
    fn test_random_array_differs() {
        let a: [u8; 32] = random_array();
        let b: [u8; 32] = random_array();
        assert_ne!(a, b);
    }

    #[test]
    fn test_decode_hex_array_length() {
        assert!(decode_hex_array::<4>("value", "00112233").is_ok());
        assert!(matches!(
            decode_hex_array::<4>("value", "001122"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(decode_hex("value", "zz"), Err(Error::InvalidArgument(_))));
    }
}
