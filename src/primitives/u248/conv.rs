//! Conversions into and out of `U248`
//!
//! Sources that are narrower than 248 bits by type convert infallibly.
//! Everything else goes through `TryFrom`, which fails with `()` when the
//! value is `>= 2^248`.

use super::core::U248;
use crate::primitives::U256;

/// Attempts to narrow a `U256` into a `U248`.
///
/// Succeeds exactly when `value < 2^248`. `2^248 - 1` is accepted and
/// `2^248` is the first rejected value.
impl TryFrom<U256> for U248 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value < U248::LIMIT {
            return Ok(U248(value));
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            value = format_args!("{value:#x}"),
            bound = format_args!("{:#x}", U248::LIMIT),
            "value does not fit in u248"
        );

        Err(())
    }
}

/// Widens a `U248` into a `U256`. The top byte is zero.
impl From<U248> for U256 {
    fn from(value: U248) -> Self {
        value.0
    }
}

/// Interprets 31 big-endian bytes (exactly 248 bits) as a `U248`.
impl From<[u8; 31]> for U248 {
    fn from(value: [u8; 31]) -> Self {
        let mut out = [0u8; 32];
        out[1..].copy_from_slice(&value);
        U248(U256::from(out))
    }
}

/// Returns the 31-byte big-endian encoding of a `U248`.
impl From<U248> for [u8; 31] {
    fn from(value: U248) -> Self {
        let mut out = [0u8; 31];
        out.copy_from_slice(&value.0.0[1..]);
        out
    }
}

impl From<u8> for U248 {
    fn from(value: u8) -> Self {
        U248(U256::from(value))
    }
}

impl From<u16> for U248 {
    fn from(value: u16) -> Self {
        U248(U256::from(value))
    }
}

impl From<u32> for U248 {
    fn from(value: u32) -> Self {
        U248(U256::from(value))
    }
}

impl From<u64> for U248 {
    fn from(value: u64) -> Self {
        U248(U256::from(value))
    }
}

impl From<u128> for U248 {
    fn from(value: u128) -> Self {
        U248(U256::from(value))
    }
}

/// Attempts to convert a `U248` into a `u64`.
///
/// Fails if any bit above the low 64 is set.
impl TryFrom<U248> for u64 {
    type Error = ();

    fn try_from(value: U248) -> Result<Self, Self::Error> {
        u64::try_from(value.0)
    }
}

/// Attempts to convert a `U248` into a `u128`.
///
/// Fails if any bit above the low 128 is set.
impl TryFrom<U248> for u128 {
    type Error = ();

    fn try_from(value: U248) -> Result<Self, Self::Error> {
        u128::try_from(value.0)
    }
}
