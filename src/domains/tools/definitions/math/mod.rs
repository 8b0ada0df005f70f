//! Arithmetic tools.
//!
//! - `arithmetic`: real-valued operations (add, divide, root, ...)
//! - `integer`: integer-domain operations (factorial, primes, gcd, ...)

pub mod arithmetic;
pub mod common;
pub mod integer;

pub use common::{BinaryParams, IntegerParams, PowerParams, RootParams};
