//! Exact integer arithmetic for pool computations.
//!
//! All pricing and share math runs through this module so that
//! intermediate products are computed at 256-bit width and every
//! narrowing back to `u128` is checked. Nothing here touches floating
//! point; the first liquidity mint and every subsequent quotient are
//! bit-exact.

mod sqrt;
mod wide;

pub use sqrt::{integer_sqrt, isqrt_u128};
pub use wide::{full_mul, mul_div, U256};
