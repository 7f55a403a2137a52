//! 256-bit intermediates for products of `u128` operands.

use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer for overflow-proof intermediate terms.
    pub struct U256(4);
}

/// Multiplies two `u128` values at full width.
///
/// The product of two 128-bit operands always fits in 256 bits, so this
/// never overflows.
#[must_use]
pub fn full_mul(a: u128, b: u128) -> U256 {
    U256::from(a) * U256::from(b)
}

/// Computes `floor(a * b / d)` with a 256-bit intermediate product.
///
/// Returns `None` if `d` is zero or the quotient does not fit in
/// `u128`. Callers map `None` to
/// [`PoolError::ArithmeticOverflow`](crate::error::PoolError) after
/// ruling out the zero-divisor case themselves.
#[must_use]
pub fn mul_div(a: u128, b: u128, d: u128) -> Option<u128> {
    if d == 0 {
        return None;
    }
    let q = full_mul(a, b) / U256::from(d);
    if q > U256::from(u128::MAX) {
        return None;
    }
    Some(q.as_u128())
}
