//! Canonical little-endian encoding.
//!
//! The ledger signs the SHA-256 of this encoding, so field order and widths
//! are part of the protocol. Integers are little-endian; variable-length data
//! carries a compact length prefix.

/// Largest value encoded as a single var-uint byte
const VAR_UINT_SINGLE_BYTE_MAX: u64 = 0xFC;

/// Append a single byte
pub fn write_u8(out: &mut Vec<u8>, v: u8) {
    out.push(v);
}

/// Append a little-endian u16
pub fn write_u16_le(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_le_bytes());
}

/// Append a little-endian u32
pub fn write_u32_le(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_le_bytes());
}

/// Append a little-endian u64
pub fn write_u64_le(out: &mut Vec<u8>, v: u64) {
    out.extend_from_slice(&v.to_le_bytes());
}

/// Append a compact variable-length unsigned integer.
///
/// | Range                   | Encoding          |
/// |-------------------------|-------------------|
/// | `..=0xFC`               | 1 byte            |
/// | `..=0xFFFF`             | `0xFD` + u16 LE   |
/// | `..=0xFFFF_FFFF`        | `0xFE` + u32 LE   |
/// | larger                  | `0xFF` + u64 LE   |
pub fn write_var_uint(out: &mut Vec<u8>, v: u64) {
    if v <= VAR_UINT_SINGLE_BYTE_MAX {
        write_u8(out, v as u8);
    } else if let Ok(v) = u16::try_from(v) {
        write_u8(out, 0xFD);
        write_u16_le(out, v);
    } else if let Ok(v) = u32::try_from(v) {
        write_u8(out, 0xFE);
        write_u32_le(out, v);
    } else {
        write_u8(out, 0xFF);
        write_u64_le(out, v);
    }
}

/// Append a var-uint length followed by the raw bytes
pub fn write_var_bytes(out: &mut Vec<u8>, b: &[u8]) {
    write_var_uint(out, b.len() as u64);
    out.extend_from_slice(b);
}

/// Append a UTF-8 string as var-bytes
pub fn write_var_string(out: &mut Vec<u8>, s: &str) {
    write_var_bytes(out, s.as_bytes());
}
