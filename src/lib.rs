//! Checked narrowing of Starknet field elements into 248-bit integers
//!
//! This crate provides a bounded unsigned integer type, `U248`, whose value
//! is guaranteed by construction to lie in `[0, 2^248 - 1]`, together with
//! the fallible conversion that produces it from a field element.
//!
//! # Module overview
//!
//! - `primitives`  
//!   Fixed-size integers. `U256` is the wide carrier able to hold any field
//!   element as well as the `2^248` bound; `U248` is the bounded type.
//!
//! - `field`  
//!   `Felt252`, an element of the field of order
//!   `P = 2^251 + 17·2^192 + 1`, and `u248_try_from_felt252`, which
//!   returns `Some` for values below `2^248` and `None` for everything
//!   else. Out-of-range input is never truncated or wrapped.
//!
//! - `error`  
//!   Errors for literal parsing. Range violations in conversions are not
//!   errors in this sense: they are reported structurally as `None` or
//!   `Err(())`.
//!
//! # Features
//!
//! - `tracing`: emit `trace`-level events when a conversion or a literal
//!   is rejected.
//!
//! # Example
//!
//! ```
//! use feltcast::field::{Felt252, u248_try_from_felt252};
//! use feltcast::primitives::U248;
//!
//! let max: Felt252 = "0xffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff"
//!     .parse()
//!     .unwrap();
//! assert_eq!(u248_try_from_felt252(max), Some(U248::MAX));
//! assert_eq!(Felt252::from(U248::MAX), max);
//!
//! let limit: Felt252 = "0x1_000000_00000000_00000000_00000000_00000000_00000000_00000000_00000000"
//!     .parse()
//!     .unwrap();
//! assert_eq!(u248_try_from_felt252(limit), None);
//! ```

pub mod error;
pub mod field;
pub mod primitives;
