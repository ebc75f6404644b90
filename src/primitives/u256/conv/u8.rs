//! Conversions between `U256` and byte representations
//!
//! All conversions preserve the internal big-endian representation of
//! `U256` and avoid implicit truncation.

use crate::primitives::U256;

/// Converts a `U256` into a 32-byte big-endian array.
impl From<U256> for [u8; 32] {
    fn from(value: U256) -> Self {
        value.0
    }
}

/// Converts a 32-byte array into a `U256`.
///
/// The input is interpreted as a big-endian 256-bit value.
impl From<[u8; 32]> for U256 {
    fn from(value: [u8; 32]) -> Self {
        U256(value)
    }
}

impl From<u8> for U256 {
    fn from(value: u8) -> Self {
        let mut out = [0u8; 32];
        out[31] = value;
        U256(out)
    }
}

impl From<u16> for U256 {
    fn from(value: u16) -> Self {
        let mut out = [0u8; 32];
        out[30..].copy_from_slice(&value.to_be_bytes());
        U256(out)
    }
}

impl From<u32> for U256 {
    fn from(value: u32) -> Self {
        let mut out = [0u8; 32];
        out[28..].copy_from_slice(&value.to_be_bytes());
        U256(out)
    }
}
