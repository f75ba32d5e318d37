//! Key derivation and management
//!
//! NKN accounts use ed25519 keys derived deterministically from a 32-byte seed.

pub mod ed25519;
mod derivation;

pub use derivation::*;
