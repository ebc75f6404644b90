//! 256-bit unsigned integer primitive
//!
//! This module defines the `U256` type, the wide carrier used by the rest
//! of the crate. Field elements live in it, and so does the `2^248` bound
//! that decides whether a field element fits into a `U248`.
//!
//! `U256` is a plain value type rather than a big-integer library. It
//! exposes the comparisons, conversions, and the handful of arithmetic
//! operations the field and bounded-integer layers need, with explicit
//! wrapping or checked semantics.
//!
//! The internal representation is big-endian and remains stable across
//! all operations and conversions.

mod conv;
mod core;
mod ops;
mod parse;

pub(crate) use parse::parse_unsigned;

/// Fixed-size 256-bit unsigned integer.
pub use self::core::U256;
