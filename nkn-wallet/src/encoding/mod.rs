//! Byte encodings used to build signing preimages

mod canonical;

pub use canonical::*;
