//! 248-bit bounded unsigned integer
//!
//! This module defines `U248`, an unsigned integer whose value is always in
//! `[0, 2^248 - 1]`. It is stored in a `U256` carrier, but the carrier is
//! private: every way of obtaining a `U248` either checks the bound or
//! starts from a type that is narrower than 248 bits.
//!
//! The checked entry points are `TryFrom<U256>` and, in the `field`
//! module, `TryFrom<Felt252>`. Both accept a value exactly when it is
//! strictly below `2^248` (`U248::LIMIT`).

mod conv;
mod core;

pub use self::core::U248;
