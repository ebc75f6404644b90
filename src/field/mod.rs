//! Starknet field elements
//!
//! This module defines `Felt252`, an element of the prime field of order
//! `P = 2^251 + 17·2^192 + 1`, and the checked narrowing of field elements
//! into `U248`.
//!
//! Only what is needed to hold, build, and range-check field elements is
//! provided: canonical construction, negation (which gives `-n` literals
//! their meaning), parsing, and formatting. General field arithmetic is
//! out of scope.

mod conv;
mod felt252;

pub use conv::u248_try_from_felt252;
pub use felt252::Felt252;
