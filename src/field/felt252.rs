use crate::error::ParseIntError;
use crate::primitives::{U256, parse_unsigned};

use std::fmt::{Display, Formatter, LowerHex, Result};
use std::ops::Neg;
use std::str::FromStr;

/// An element of the Starknet prime field.
///
/// The value is always the canonical residue, `0 <= value < P`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Felt252(pub(super) U256);

impl Felt252 {
    /// The field prime, `2^251 + 17·2^192 + 1`.
    pub const PRIME: U256 = U256::from_be_bytes([
        0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x11, //
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
    ]);

    /// The additive identity.
    pub const ZERO: Self = Self(U256::ZERO);

    /// The multiplicative identity.
    pub const ONE: Self = Self(U256::ONE);

    /// The largest element, `P - 1` (the field's `-1`).
    pub const MAX: Self = Self(U256::from_be_bytes([
        0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x11, //
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ]));

    /// Returns the canonical integer value.
    pub const fn to_u256(self) -> U256 {
        self.0
    }

    /// Returns `true` for the zero element.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

/// Attempts to build a field element from an integer.
///
/// Succeeds only for canonical values, `value < P`. Larger integers are
/// rejected rather than reduced.
impl TryFrom<U256> for Felt252 {
    type Error = ();

    fn try_from(value: U256) -> std::result::Result<Self, Self::Error> {
        if value < Felt252::PRIME {
            Ok(Felt252(value))
        } else {
            Err(())
        }
    }
}

impl From<Felt252> for U256 {
    fn from(value: Felt252) -> Self {
        value.0
    }
}

impl From<u8> for Felt252 {
    fn from(value: u8) -> Self {
        Felt252(U256::from(value))
    }
}

impl From<u16> for Felt252 {
    fn from(value: u16) -> Self {
        Felt252(U256::from(value))
    }
}

impl From<u32> for Felt252 {
    fn from(value: u32) -> Self {
        Felt252(U256::from(value))
    }
}

impl From<u64> for Felt252 {
    fn from(value: u64) -> Self {
        Felt252(U256::from(value))
    }
}

impl From<u128> for Felt252 {
    fn from(value: u128) -> Self {
        Felt252(U256::from(value))
    }
}

impl Neg for Felt252 {
    type Output = Felt252;

    /// Additive inverse: `-0 = 0`, otherwise `P - value`.
    fn neg(self) -> Self::Output {
        if self.is_zero() {
            return self;
        }

        Felt252(Felt252::PRIME - self.0)
    }
}

impl FromStr for Felt252 {
    type Err = ParseIntError;

    /// Parses a field element literal.
    ///
    /// Accepts decimal or `0x` hex, optionally preceded by `-`, which
    /// denotes the additive inverse (`-1` is `P - 1`). The magnitude must
    /// be below `P`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (negative, magnitude, offset) = match s.strip_prefix('-') {
            Some(rest) => (true, rest, 1),
            None => (false, s, 0),
        };

        let value = parse_unsigned(magnitude, offset)?;
        let felt = Felt252::try_from(value).map_err(|()| {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                literal = s,
                bound = format_args!("{:#x}", Felt252::PRIME),
                "literal is not below the field prime"
            );

            ParseIntError::NotInField
        })?;

        Ok(if negative { -felt } else { felt })
    }
}

impl Display for Felt252 {
    /// Formats the canonical value in decimal.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(&self.0, f)
    }
}

impl LowerHex for Felt252 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        LowerHex::fmt(&self.0, f)
    }
}
