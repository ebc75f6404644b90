//! Error types for literal parsing.
//!
//! Narrowing conversions do not use these: a value that does not fit is
//! reported as `Err(())` / `None`, with no payload. Only text parsing has
//! more than one way to fail.

use thiserror::Error;

/// Errors returned when parsing a `U256`, `U248` or `Felt252` literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseIntError {
    /// The literal has no digits.
    #[error("cannot parse integer from empty string")]
    Empty,

    /// A character is not a digit of the literal's radix, or a `_`
    /// separator is not placed between two digits.
    #[error("invalid digit {found:?} at byte {index}")]
    InvalidDigit { index: usize, found: char },

    /// The literal does not fit into the target width.
    #[error("number too large to fit in target type")]
    Overflow,

    /// The literal is not below the field prime.
    #[error("number is not a canonical field element")]
    NotInField,
}
