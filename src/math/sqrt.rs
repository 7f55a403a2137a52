//! Floor integer square root.

use super::wide::U256;

/// Returns `floor(sqrt(value))` using Newton's method.
///
/// The iteration is seeded at `value / 2 + 1` and runs while the
/// estimate strictly decreases, which converges to the exact floor for
/// every input. This gates the very first liquidity mint, so it must be
/// exact: any rounding error there would permanently skew the share
/// accounting.
///
/// `0 → 0`; `1`, `2`, `3 → 1`.
#[must_use]
pub fn integer_sqrt(value: U256) -> U256 {
    if value.is_zero() {
        return U256::zero();
    }
    let two = U256::from(2u8);
    let mut best = value;
    let mut guess = value / two + U256::one();
    while guess < best {
        best = guess;
        guess = (value / guess + guess) / two;
    }
    best
}

/// [`integer_sqrt`] for `u128` inputs.
///
/// The root of a `u128` always fits back in `u128`.
#[must_use]
pub fn isqrt_u128(value: u128) -> u128 {
    integer_sqrt(U256::from(value)).as_u128()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        assert_eq!(isqrt_u128(0), 0);
        assert_eq!(isqrt_u128(1), 1);
        assert_eq!(isqrt_u128(2), 1);
        assert_eq!(isqrt_u128(3), 1);
        assert_eq!(isqrt_u128(4), 2);
    }

    #[test]
    fn perfect_squares() {
        assert_eq!(isqrt_u128(4_000_000), 2_000);
        assert_eq!(isqrt_u128(1_000_000_000_000), 1_000_000);
    }

    #[test]
    fn floors_between_squares() {
        assert_eq!(isqrt_u128(8), 2);
        assert_eq!(isqrt_u128(99), 9);
        assert_eq!(isqrt_u128(10_000_019), 3_162);
    }

    #[test]
    fn max_u128_input() {
        // floor(sqrt(2^128 - 1)) = 2^64 - 1
        assert_eq!(isqrt_u128(u128::MAX), u64::MAX as u128);
    }

    #[test]
    fn wide_product_root_fits_u128() {
        // sqrt((2^128 - 1)^2) = 2^128 - 1, the largest possible first mint.
        let product = U256::from(u128::MAX) * U256::from(u128::MAX);
        assert_eq!(integer_sqrt(product), U256::from(u128::MAX));
    }

    #[test]
    fn exactness_around_square_boundaries() {
        for n in [2_000u128, 65_536, 1_000_000_007] {
            let sq = n * n;
            assert_eq!(isqrt_u128(sq - 1), n - 1);
            assert_eq!(isqrt_u128(sq), n);
            assert_eq!(isqrt_u128(sq + 1), n);
        }
    }
}
