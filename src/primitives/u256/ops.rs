//! Arithmetic for `U256`.
//!
//! `-` wraps modulo 2²⁵⁶; the field layer only subtracts a canonical
//! value from the prime, which never borrows. The `checked_*` methods
//! report overflow as `None` and drive literal parsing.

use crate::primitives::u256::U256;

use std::ops::Sub;

impl U256 {
    /// Adds two values, returning the wrapped sum and the outgoing carry.
    pub fn overflowing_add(self, rhs: U256) -> (U256, bool) {
        let mut out = [0u8; 32];
        let mut carry = 0u16;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()).rev() {
            let sum = a as u16 + b as u16 + carry;
            *o = (sum & 0xFF) as u8;
            carry = sum >> 8;
        }

        (U256(out), carry != 0)
    }

    /// Subtracts `rhs`, returning the wrapped difference and the outgoing borrow.
    pub fn overflowing_sub(self, rhs: U256) -> (U256, bool) {
        let mut out = [0u8; 32];
        let mut borrow = 0i16;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()).rev() {
            let lhs = a as i16;
            let sub = b as i16 + borrow;

            if lhs >= sub {
                *o = (lhs - sub) as u8;
                borrow = 0;
            } else {
                *o = (lhs + 256 - sub) as u8;
                borrow = 1;
            }
        }

        (U256(out), borrow != 0)
    }

    /// Multiplies two values, returning the low 256 bits of the product and
    /// whether any higher bit was set.
    pub fn overflowing_mul(self, rhs: U256) -> (U256, bool) {
        let mut lhs: [u64; 4] = self.into();
        let mut rhs: [u64; 4] = rhs.into();
        lhs.reverse();
        rhs.reverse();

        // Little-endian 64-bit columns of the full 512-bit product.
        let mut acc = [0u128; 8];

        for (i, &a) in lhs.iter().enumerate() {
            let mut carry = 0u128;
            for (j, &b) in rhs.iter().enumerate() {
                let t = acc[i + j] + a as u128 * b as u128 + carry;
                acc[i + j] = t & 0xFFFF_FFFF_FFFF_FFFF;
                carry = t >> 64;
            }
            acc[i + 4] += carry;
        }

        let overflow = acc[4..].iter().any(|&w| w != 0);

        let mut out = [0u64; 4];
        for (o, &a) in out.iter_mut().zip(acc.iter().take(4).rev()) {
            *o = a as u64;
        }

        (U256::from(out), overflow)
    }

    /// Checked addition. Returns `None` on overflow.
    pub fn checked_add(self, rhs: U256) -> Option<U256> {
        match self.overflowing_add(rhs) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    /// Checked multiplication. Returns `None` on overflow.
    pub fn checked_mul(self, rhs: U256) -> Option<U256> {
        match self.overflowing_mul(rhs) {
            (product, false) => Some(product),
            (_, true) => None,
        }
    }

    /// Divides by a small non-zero divisor, returning `(quotient, remainder)`.
    ///
    /// # Panics
    /// Panics if `divisor` is zero.
    pub(crate) fn div_rem_small(self, divisor: u8) -> (U256, u8) {
        assert!(divisor != 0, "division by zero");

        let mut quotient = [0u8; 32];
        let mut remainder = 0u16;

        for (q, &byte) in quotient.iter_mut().zip(self.0.iter()) {
            let current = (remainder << 8) | byte as u16;
            *q = (current / divisor as u16) as u8;
            remainder = current % divisor as u16;
        }

        (U256(quotient), remainder as u8)
    }
}

impl Sub for U256 {
    type Output = U256;

    fn sub(self, rhs: U256) -> Self::Output {
        self.overflowing_sub(rhs).0
    }
}
