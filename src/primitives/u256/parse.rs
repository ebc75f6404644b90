//! Text parsing for `U256`.
//!
//! Accepted forms are decimal (`12345`) and hexadecimal with a `0x` or `0X`
//! prefix (`0x1f`). Digits may be grouped with `_`, which must sit between
//! two digits. Signs are not accepted here; the field layer handles `-`.

use crate::error::ParseIntError;
use crate::primitives::U256;

use std::str::FromStr;

impl FromStr for U256 {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_unsigned(s, 0)
    }
}

/// Parses an unsigned literal.
///
/// `offset` is the byte position of `src` inside the caller's string, so
/// that `InvalidDigit` indices point into the text the user wrote.
pub(crate) fn parse_unsigned(src: &str, offset: usize) -> Result<U256, ParseIntError> {
    let parsed = parse_digits(src, offset);

    #[cfg(feature = "tracing")]
    if let Err(err) = &parsed {
        tracing::trace!(literal = src, offset, error = %err, "rejected integer literal");
    }

    parsed
}

fn parse_digits(src: &str, offset: usize) -> Result<U256, ParseIntError> {
    let (digits, radix, offset) = match src.strip_prefix("0x").or_else(|| src.strip_prefix("0X")) {
        Some(rest) => (rest, 16u8, offset + 2),
        None => (src, 10u8, offset),
    };

    if digits.is_empty() {
        return Err(ParseIntError::Empty);
    }

    let radix_wide = U256::from(radix);
    let mut acc = U256::ZERO;
    let mut prev_digit = false;
    let mut last_sep = None;

    for (i, c) in digits.char_indices() {
        let index = offset + i;

        if c == '_' {
            if !prev_digit {
                return Err(ParseIntError::InvalidDigit { index, found: c });
            }
            prev_digit = false;
            last_sep = Some(index);
            continue;
        }

        let digit = c
            .to_digit(radix as u32)
            .ok_or(ParseIntError::InvalidDigit { index, found: c })?;

        acc = acc
            .checked_mul(radix_wide)
            .and_then(|v| v.checked_add(U256::from(digit)))
            .ok_or(ParseIntError::Overflow)?;
        prev_digit = true;
    }

    if !prev_digit {
        return match last_sep {
            Some(index) => Err(ParseIntError::InvalidDigit { index, found: '_' }),
            None => Err(ParseIntError::Empty),
        };
    }

    Ok(acc)
}
