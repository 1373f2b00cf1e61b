//! 16-bit half-precision floating point.
//!
//! Bit-exact conversion between half (1 sign, 5 exponent, 10 mantissa bits)
//! and single-precision bit patterns, in two independent implementations: a
//! table-driven path and a branch-based arithmetic path. The public
//! [`encode`] and [`decode`] use the tables when the `lut` feature is on.

pub mod bits;
pub use bits::*;

pub mod classify;
pub use classify::*;

mod decode;
pub use decode::*;

mod encode;
pub use encode::*;

mod error;
pub use error::*;

pub mod generate;

pub mod layout;

mod scalar;
pub use scalar::*;

pub mod tables;
