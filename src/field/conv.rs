//! Conversions between `Felt252` and `U248`

use super::felt252::Felt252;
use crate::primitives::{U248, U256};

/// Attempts to narrow a field element into a `U248`.
///
/// Returns `Some` with the same integer value when `value < 2^248`, and
/// `None` otherwise. Every element in `[2^248, P)` is rejected, including
/// `-1`. The result carries no further diagnostic.
///
/// ```
/// use feltcast::field::{Felt252, u248_try_from_felt252};
/// use feltcast::primitives::U248;
///
/// assert_eq!(u248_try_from_felt252(Felt252::from(1u8)), Some(U248::ONE));
/// assert_eq!(u248_try_from_felt252(-Felt252::ONE), None);
/// ```
pub fn u248_try_from_felt252(value: Felt252) -> Option<U248> {
    U248::try_from(value).ok()
}

impl Felt252 {
    /// Method form of [`u248_try_from_felt252`].
    pub fn try_into_u248(self) -> Option<U248> {
        u248_try_from_felt252(self)
    }
}

/// Narrows a field element into a `U248`, failing with `()` when the
/// canonical value is `>= 2^248`.
impl TryFrom<Felt252> for U248 {
    type Error = ();

    fn try_from(value: Felt252) -> Result<Self, Self::Error> {
        U248::try_from(value.to_u256())
    }
}

/// Embeds a `U248` into the field. Always succeeds since `2^248 < P`.
impl From<U248> for Felt252 {
    fn from(value: U248) -> Self {
        Felt252(U256::from(value))
    }
}
