//! Fixed-point instantaneous price.

use super::Amount;
use crate::error::PoolError;
use crate::math;

/// An instantaneous exchange rate, scaled by [`Price::SCALE`] (10^18)
/// for fractional precision.
///
/// A price of one asset in terms of the other is
/// `other_reserve * SCALE / this_reserve`; a value of `2 * SCALE` means
/// one unit of this asset is worth two units of the other at the
/// current reserves, ignoring the slippage a real trade would incur.
///
/// # Examples
///
/// ```
/// use duopool::domain::{Amount, Price};
///
/// let price = Price::from_ratio(Amount::new(4000), Amount::new(1000)).expect("non-zero");
/// assert_eq!(price.get(), 4 * Price::SCALE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub struct Price(u128);

impl Price {
    /// Fixed-point scaling factor (10^18).
    pub const SCALE: u128 = 1_000_000_000_000_000_000;

    /// Computes `numer * SCALE / denom` with a 256-bit intermediate.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InsufficientLiquidity`] if `denom` is zero.
    /// - [`PoolError::ArithmeticOverflow`] if the scaled quotient does
    ///   not fit in `u128`.
    pub fn from_ratio(numer: Amount, denom: Amount) -> Result<Self, PoolError> {
        if denom.is_zero() {
            return Err(PoolError::InsufficientLiquidity);
        }
        math::mul_div(numer.get(), Self::SCALE, denom.get())
            .map(Self)
            .ok_or(PoolError::ArithmeticOverflow)
    }

    /// Returns the raw fixed-point value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn whole_ratio() {
        let Ok(p) = Price::from_ratio(Amount::new(4000), Amount::new(1000)) else {
            panic!("expected Ok");
        };
        assert_eq!(p.get(), 4 * Price::SCALE);
    }

    #[test]
    fn fractional_ratio_truncates() {
        // 1/3 scaled: floor(1e18 / 3) = 333_333_333_333_333_333
        let Ok(p) = Price::from_ratio(Amount::new(1), Amount::new(3)) else {
            panic!("expected Ok");
        };
        assert_eq!(p.get(), 333_333_333_333_333_333);
    }

    #[test]
    fn zero_denominator_rejected() {
        assert_eq!(
            Price::from_ratio(Amount::new(1), Amount::ZERO),
            Err(PoolError::InsufficientLiquidity)
        );
    }

    #[test]
    fn huge_ratio_overflows() {
        let err = Price::from_ratio(Amount::MAX, Amount::new(1));
        assert_eq!(err, Err(PoolError::ArithmeticOverflow));
    }

    #[test]
    fn large_reserve_within_range() {
        // 1e20 units priced against itself: fits comfortably after scaling.
        let r = Amount::new(100_000_000_000_000_000_000);
        let Ok(p) = Price::from_ratio(r, r) else {
            panic!("expected Ok");
        };
        assert_eq!(p.get(), Price::SCALE);
    }
}
