use crate::error::ParseIntError;
use crate::primitives::U256;

use std::fmt::{Display, Formatter, LowerHex, Result};
use std::str::FromStr;

/// Unsigned integer in the range `[0, 2^248 - 1]`.
///
/// There is no unchecked constructor. Any `U248` that exists satisfies
/// `value < 2^248`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U248(pub(super) U256);

impl U248 {
    /// Width of the type in bits.
    pub const BITS: u32 = 248;

    /// The exclusive upper bound, `2^248`.
    ///
    /// This is the first value rejected by the checked conversions, so it
    /// is a `U256` and not a `U248`.
    pub const LIMIT: U256 = U256::pow2(Self::BITS);

    /// The value zero.
    pub const ZERO: Self = Self(U256::ZERO);

    /// The value one.
    pub const ONE: Self = Self(U256::ONE);

    /// The largest value, `2^248 - 1`.
    pub const MAX: Self = Self(U256::from_be_bytes(max_be()));

    /// Returns the value widened to a `U256`.
    pub const fn get(self) -> U256 {
        self.0
    }

    /// Returns the 32-byte big-endian encoding. The first byte is always zero.
    pub const fn to_be_bytes(self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    /// Counts leading zero bits relative to 248 bits (`0..=248`).
    pub fn leading_zeros(&self) -> u32 {
        self.0.leading_zeros() - (U256::BITS - Self::BITS)
    }
}

const fn max_be() -> [u8; 32] {
    let mut out = [0xFFu8; 32];
    out[0] = 0;
    out
}

impl Display for U248 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(&self.0, f)
    }
}

impl LowerHex for U248 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        LowerHex::fmt(&self.0, f)
    }
}

impl FromStr for U248 {
    type Err = ParseIntError;

    /// Parses a decimal or `0x` literal, rejecting values `>= 2^248`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wide: U256 = s.parse()?;
        U248::try_from(wide).map_err(|()| ParseIntError::Overflow)
    }
}
