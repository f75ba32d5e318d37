//! Transaction building and signing
//!
//! Payloads are built from typed arguments, wrapped in an unsigned
//! transaction, signed over the SHA-256 of their canonical encoding and
//! serialized as protobuf for submission.

pub mod types;
mod amount;
mod builder;
mod payload;

pub use amount::*;
pub use builder::*;
pub use payload::*;
pub use types::PayloadType;
