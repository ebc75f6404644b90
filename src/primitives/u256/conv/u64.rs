//! Conversions between `U256` and 64-bit integer representations

use crate::primitives::U256;

/// Converts a `U256` into four 64-bit words.
///
/// The resulting array is ordered from most significant to least
/// significant word.
impl From<U256> for [u64; 4] {
    fn from(value: U256) -> Self {
        let mut out = [0u64; 4];

        for (o, chunk) in out.iter_mut().zip(value.0.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *o = u64::from_be_bytes(buf);
        }

        out
    }
}

/// Converts four 64-bit words, most significant first, into a `U256`.
impl From<[u64; 4]> for U256 {
    fn from(value: [u64; 4]) -> Self {
        let mut out = [0u8; 32];

        for (chunk, v) in out.chunks_exact_mut(8).zip(value.into_iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }

        U256(out)
    }
}

/// Attempts to convert a `U256` into a `u64`.
///
/// The conversion succeeds only if the upper 192 bits of the value are zero.
impl TryFrom<U256> for u64 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value.0[..24].iter().any(|&b| b != 0) {
            return Err(());
        }

        let mut buf = [0u8; 8];
        buf.copy_from_slice(&value.0[24..]);

        Ok(u64::from_be_bytes(buf))
    }
}

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        let mut out = [0u8; 32];
        out[24..].copy_from_slice(&value.to_be_bytes());
        U256(out)
    }
}
