//! Primitive types
//!
//! Primitives are simple, fixed-size, dependency-free building blocks with
//! well-defined semantics and predictable behavior. They are intentionally
//! minimal and do not attempt to be full big-integer libraries.
//!
//! Current primitives:
//! - `U256`: a fixed-size 256-bit unsigned integer, the wide carrier
//! - `U248`: an unsigned integer bounded to `[0, 2^248 - 1]`

mod u248;
mod u256;

pub use u248::U248;
pub use u256::U256;

pub(crate) use u256::parse_unsigned;
