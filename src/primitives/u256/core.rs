//! 256-bit unsigned integer primitive
//!
//! The value is stored as 32 big-endian bytes. Deriving `Ord` on the byte
//! array therefore orders values numerically, which is what every range
//! check in this crate relies on.

use std::fmt::{Display, Formatter, LowerHex, Result};

/// Fixed-size 256-bit unsigned integer.
///
/// The value is stored as 32 bytes in **big-endian** order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256(pub(crate) [u8; 32]);

impl U256 {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; 32]);

    /// The value one.
    pub const ONE: Self = Self::one_be();

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self([255u8; 32]);

    /// Number of bits in the representation.
    pub const BITS: u32 = 256;

    /// Returns the value one encoded in big-endian form.
    ///
    /// This is a `const` constructor suitable for use in constant contexts.
    pub const fn one_be() -> Self {
        let mut out = [0u8; 32];
        out[31] = 1;
        U256(out)
    }

    /// Builds a value from 32 big-endian bytes.
    pub const fn from_be_bytes(bytes: [u8; 32]) -> Self {
        U256(bytes)
    }

    /// Returns the big-endian byte representation.
    pub const fn to_be_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Returns `2^exp`, or zero when `exp >= 256`.
    pub const fn pow2(exp: u32) -> Self {
        let mut out = [0u8; 32];
        if exp < 256 {
            let byte = 31 - (exp / 8) as usize;
            out[byte] = 1 << (exp % 8);
        }
        U256(out)
    }

    /// Returns `true` if every bit is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=256`.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &byte in self.0.iter() {
            if byte == 0 {
                count += 8;
            } else {
                count += byte.leading_zeros();
                return count;
            }
        }

        count
    }
}

impl Display for U256 {
    /// Formats the value in decimal.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.is_zero() {
            return f.pad_integral(true, "", "0");
        }

        // 2^256 has 78 decimal digits.
        let mut digits = [0u8; 78];
        let mut start = digits.len();
        let mut rest = *self;

        while !rest.is_zero() {
            let (quotient, remainder) = rest.div_rem_small(10);
            start -= 1;
            digits[start] = b'0' + remainder;
            rest = quotient;
        }

        // Only ASCII digits were written.
        let text = std::str::from_utf8(&digits[start..]).map_err(|_| std::fmt::Error)?;
        f.pad_integral(true, "", text)
    }
}

impl LowerHex for U256 {
    /// Formats the value as minimal lowercase hexadecimal.
    ///
    /// The alternate flag (`{:#x}`) adds the `0x` prefix.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        const HEX: &[u8; 16] = b"0123456789abcdef";

        let mut nibbles = [0u8; 64];
        for (i, byte) in self.0.iter().enumerate() {
            nibbles[2 * i] = HEX[(byte >> 4) as usize];
            nibbles[2 * i + 1] = HEX[(byte & 0x0F) as usize];
        }

        let first = nibbles.iter().position(|&c| c != b'0').unwrap_or(63);
        let text = std::str::from_utf8(&nibbles[first..]).map_err(|_| std::fmt::Error)?;
        f.pad_integral(true, "0x", text)
    }
}
