//! Account management functionality
//!
//! Address codec, account derivation, the persisted wallet format and the
//! wallet that ties them to a node.

pub mod address;
mod identity;
mod keystore;
mod program;
mod wallet;

pub use address::{address_to_program_hash, program_hash_to_address, verify_address, ProgramHash};
pub use identity::*;
pub use keystore::*;
pub use program::*;
pub use wallet::*;
