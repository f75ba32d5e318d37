//! Cryptographic primitives and operations
//!
//! This module provides hashing, seed-based ed25519 key derivation and the
//! envelope encryption used by persisted wallets.

pub mod encryption;
pub mod hash;
pub mod keys;

pub use keys::*;
