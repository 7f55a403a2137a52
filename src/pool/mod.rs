//! Reserve/share state machine for a two-asset constant-product pool.
//!
//! [`Pool`] owns the two reserve balances, the total-shares counter,
//! and the per-account share ledger. Every mutation is split into a
//! *plan* step — pure validation and computation of the complete
//! post-state — and an *apply* step that only writes precomputed
//! values. The engine runs external transfers between the two steps,
//! so a failure anywhere leaves the pool byte-for-byte unchanged.
//!
//! # Invariants
//!
//! After every completed operation:
//!
//! - `reserve_x == 0 ⟺ reserve_y == 0 ⟺ total_shares == 0`
//! - `total_shares == Σ shares_by_account`
//! - for any swap, the post-trade reserve product is ≥ the pre-trade
//!   product (the retained fee makes it strictly greater in the normal
//!   case)
//!
//! # Swap Algorithm (fee on input, 0.3%)
//!
//! 1. `effective_in = amount_in × 997`
//! 2. `amount_out = effective_in × reserve_out / (reserve_in × 1000 + effective_in)`
//! 3. `reserve_in += amount_in` (fee stays in the pool)
//! 4. `reserve_out -= amount_out`
//!
//! Baking the fee into the multiplier before computing the output is
//! what guarantees the reserve product never decreases.

use std::collections::BTreeMap;

use crate::domain::{AccountId, Amount, Shares, Side};
use crate::error::{PoolError, Result};
use crate::math::{self, U256};

/// Swap fee numerator: the input keeps 997/1000 of its weight.
const FEE_NUMERATOR: u128 = 997;

/// Swap fee denominator (1000 = 100%, so the fee is 0.3%).
const FEE_DENOMINATOR: u128 = 1_000;

/// Staged outcome of an `add_liquidity` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AddPlan {
    /// Shares the depositor will be credited.
    pub(crate) minted: Shares,
    new_reserve_x: Amount,
    new_reserve_y: Amount,
    new_total_shares: Shares,
    new_account_shares: Shares,
}

/// Staged outcome of a `remove_liquidity` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RemovePlan {
    /// Asset X the withdrawer will receive.
    pub(crate) amount_x: Amount,
    /// Asset Y the withdrawer will receive.
    pub(crate) amount_y: Amount,
    /// Shares burned from the account.
    pub(crate) burned: Shares,
    new_reserve_x: Amount,
    new_reserve_y: Amount,
    new_total_shares: Shares,
    new_account_shares: Shares,
}

/// Staged outcome of a `swap` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SwapPlan {
    /// Reserve side the input lands on.
    pub(crate) side_in: Side,
    /// Input amount, fee included.
    pub(crate) amount_in: Amount,
    /// Output amount leaving the opposite reserve.
    pub(crate) amount_out: Amount,
    new_reserve_x: Amount,
    new_reserve_y: Amount,
}

/// The pool's entire mutable state.
///
/// Created empty and mutated exclusively through plan/apply pairs; it
/// is never observed mid-operation (the engine serializes access).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pool {
    reserve_x: Amount,
    reserve_y: Amount,
    total_shares: Shares,
    shares_by_account: BTreeMap<AccountId, Shares>,
}

impl Pool {
    /// Creates an empty pool: both reserves and all shares at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current holding of asset X.
    #[must_use]
    pub const fn reserve_x(&self) -> Amount {
        self.reserve_x
    }

    /// Current holding of asset Y.
    #[must_use]
    pub const fn reserve_y(&self) -> Amount {
        self.reserve_y
    }

    /// Sum of all outstanding ownership shares.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// The account's recorded share balance (zero if absent).
    #[must_use]
    pub fn shares_of(&self, account: &AccountId) -> Shares {
        self.shares_by_account
            .get(account)
            .copied()
            .unwrap_or(Shares::ZERO)
    }

    /// Returns `true` if the pool holds no liquidity.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_shares.is_zero()
    }

    const fn reserve_on(&self, side: Side) -> Amount {
        match side {
            Side::X => self.reserve_x,
            Side::Y => self.reserve_y,
        }
    }

    // -- add liquidity ------------------------------------------------------

    /// Validates a deposit and computes the complete post-state.
    ///
    /// For the first deposit, shares minted are
    /// `integer_sqrt(amount_x × amount_y)`. For a seeded pool the
    /// deposit must satisfy `amount_y ≥ amount_x × reserve_y / reserve_x`
    /// (truncating division) and mints
    /// `amount_x × total_shares / reserve_x` shares. The ratio check is
    /// deliberately one-sided: over-supplied Y is accepted into
    /// reserves without extra shares, diluting the depositor. Callers
    /// are expected to supply the exact proportional amount.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroAmount`] if either amount is zero.
    /// - [`PoolError::InvalidRatio`] if the deposit under-supplies Y.
    /// - [`PoolError::InsufficientLiquidity`] if the computed shares
    ///   round to zero (dust deposit).
    /// - [`PoolError::ArithmeticOverflow`] if a post-state value would
    ///   exceed `u128`.
    pub(crate) fn plan_add_liquidity(
        &self,
        account: &AccountId,
        amount_x: Amount,
        amount_y: Amount,
    ) -> Result<AddPlan> {
        if amount_x.is_zero() || amount_y.is_zero() {
            return Err(PoolError::ZeroAmount);
        }

        let minted = if self.total_shares.is_zero() {
            let product = math::full_mul(amount_x.get(), amount_y.get());
            // The root of a 256-bit product of u128 factors always fits u128.
            Shares::new(math::integer_sqrt(product).as_u128())
        } else {
            let required_y =
                math::mul_div(amount_x.get(), self.reserve_y.get(), self.reserve_x.get())
                    .ok_or(PoolError::ArithmeticOverflow)?;
            if amount_y.get() < required_y {
                return Err(PoolError::InvalidRatio);
            }
            let minted =
                math::mul_div(amount_x.get(), self.total_shares.get(), self.reserve_x.get())
                    .ok_or(PoolError::ArithmeticOverflow)?;
            Shares::new(minted)
        };

        if minted.is_zero() {
            return Err(PoolError::InsufficientLiquidity);
        }

        Ok(AddPlan {
            minted,
            new_reserve_x: self
                .reserve_x
                .checked_add(amount_x)
                .ok_or(PoolError::ArithmeticOverflow)?,
            new_reserve_y: self
                .reserve_y
                .checked_add(amount_y)
                .ok_or(PoolError::ArithmeticOverflow)?,
            new_total_shares: self
                .total_shares
                .checked_add(minted)
                .ok_or(PoolError::ArithmeticOverflow)?,
            new_account_shares: self
                .shares_of(account)
                .checked_add(minted)
                .ok_or(PoolError::ArithmeticOverflow)?,
        })
    }

    /// Commits a staged deposit. Infallible: every value was validated
    /// at plan time.
    pub(crate) fn apply_add_liquidity(&mut self, account: &AccountId, plan: &AddPlan) {
        self.reserve_x = plan.new_reserve_x;
        self.reserve_y = plan.new_reserve_y;
        self.total_shares = plan.new_total_shares;
        self.shares_by_account
            .insert(*account, plan.new_account_shares);
    }

    // -- remove liquidity ---------------------------------------------------

    /// Validates a withdrawal and computes the complete post-state.
    ///
    /// Each returned amount is `shares × reserve / total_shares` with
    /// truncating division, so withdrawal always rounds in the pool's
    /// favour; the last residual unit may be unrecoverable by any
    /// single withdrawal, which prevents reserve underflow.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroAmount`] if `shares` is zero.
    /// - [`PoolError::InvalidShareAmount`] if `shares` exceeds the
    ///   account's recorded balance.
    /// - [`PoolError::InsufficientLiquidity`] if either computed amount
    ///   rounds to zero.
    pub(crate) fn plan_remove_liquidity(
        &self,
        account: &AccountId,
        shares: Shares,
    ) -> Result<RemovePlan> {
        if shares.is_zero() {
            return Err(PoolError::ZeroAmount);
        }
        let balance = self.shares_of(account);
        if shares > balance {
            return Err(PoolError::InvalidShareAmount);
        }

        // balance >= shares > 0 implies total_shares > 0.
        let amount_x = math::mul_div(shares.get(), self.reserve_x.get(), self.total_shares.get())
            .ok_or(PoolError::ArithmeticOverflow)?;
        let amount_y = math::mul_div(shares.get(), self.reserve_y.get(), self.total_shares.get())
            .ok_or(PoolError::ArithmeticOverflow)?;
        if amount_x == 0 || amount_y == 0 {
            return Err(PoolError::InsufficientLiquidity);
        }

        Ok(RemovePlan {
            amount_x: Amount::new(amount_x),
            amount_y: Amount::new(amount_y),
            burned: shares,
            new_reserve_x: self
                .reserve_x
                .checked_sub(Amount::new(amount_x))
                .ok_or(PoolError::ArithmeticOverflow)?,
            new_reserve_y: self
                .reserve_y
                .checked_sub(Amount::new(amount_y))
                .ok_or(PoolError::ArithmeticOverflow)?,
            new_total_shares: self
                .total_shares
                .checked_sub(shares)
                .ok_or(PoolError::ArithmeticOverflow)?,
            new_account_shares: balance
                .checked_sub(shares)
                .ok_or(PoolError::ArithmeticOverflow)?,
        })
    }

    /// Commits a staged withdrawal. Accounts whose balance reaches zero
    /// are dropped from the ledger (zero entries are semantically
    /// absent).
    pub(crate) fn apply_remove_liquidity(&mut self, account: &AccountId, plan: &RemovePlan) {
        self.reserve_x = plan.new_reserve_x;
        self.reserve_y = plan.new_reserve_y;
        self.total_shares = plan.new_total_shares;
        if plan.new_account_shares.is_zero() {
            self.shares_by_account.remove(account);
        } else {
            self.shares_by_account
                .insert(*account, plan.new_account_shares);
        }
    }

    // -- swap ---------------------------------------------------------------

    /// Validates a swap and computes the complete post-state.
    ///
    /// All intermediate terms are 256-bit, so `reserve_in × 1000` and
    /// `amount_in × 997 × reserve_out` can never silently wrap; the one
    /// unrepresentable corner (both operands near `u128::MAX`) surfaces
    /// as [`PoolError::ArithmeticOverflow`].
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroAmount`] if `amount_in` is zero.
    /// - [`PoolError::InsufficientLiquidity`] if the pool is empty.
    /// - [`PoolError::InsufficientOutputAmount`] if the output rounds
    ///   to zero.
    /// - [`PoolError::ArithmeticOverflow`] on unrepresentable
    ///   intermediates or post-state values.
    pub(crate) fn plan_swap(&self, side_in: Side, amount_in: Amount) -> Result<SwapPlan> {
        if amount_in.is_zero() {
            return Err(PoolError::ZeroAmount);
        }
        if self.total_shares.is_zero() {
            return Err(PoolError::InsufficientLiquidity);
        }

        let reserve_in = self.reserve_on(side_in);
        let reserve_out = self.reserve_on(side_in.other());

        let effective_in = math::full_mul(amount_in.get(), FEE_NUMERATOR);
        let numerator = effective_in
            .checked_mul(U256::from(reserve_out.get()))
            .ok_or(PoolError::ArithmeticOverflow)?;
        let denominator = math::full_mul(reserve_in.get(), FEE_DENOMINATOR) + effective_in;
        // The denominator strictly exceeds effective_in, so the quotient
        // is strictly below reserve_out: it fits u128 and the later
        // subtraction cannot underflow.
        let amount_out = Amount::new((numerator / denominator).as_u128());
        if amount_out.is_zero() {
            return Err(PoolError::InsufficientOutputAmount);
        }

        let new_reserve_in = reserve_in
            .checked_add(amount_in)
            .ok_or(PoolError::ArithmeticOverflow)?;
        let new_reserve_out = reserve_out
            .checked_sub(amount_out)
            .ok_or(PoolError::ArithmeticOverflow)?;

        let (new_reserve_x, new_reserve_y) = match side_in {
            Side::X => (new_reserve_in, new_reserve_out),
            Side::Y => (new_reserve_out, new_reserve_in),
        };
        Ok(SwapPlan {
            side_in,
            amount_in,
            amount_out,
            new_reserve_x,
            new_reserve_y,
        })
    }

    /// Commits a staged swap.
    pub(crate) fn apply_swap(&mut self, plan: &SwapPlan) {
        self.reserve_x = plan.new_reserve_x;
        self.reserve_y = plan.new_reserve_y;
    }

    // -- price --------------------------------------------------------------

    /// Instantaneous price of the asset on `side` in terms of the
    /// other, scaled by [`Price::SCALE`](crate::domain::Price::SCALE).
    ///
    /// Read-only; does not account for the slippage a trade of nonzero
    /// size would incur.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InsufficientLiquidity`] if either reserve is zero.
    /// - [`PoolError::ArithmeticOverflow`] if the scaled price exceeds
    ///   `u128`.
    pub fn spot_price(&self, side: Side) -> Result<crate::domain::Price> {
        let this_reserve = self.reserve_on(side);
        let other_reserve = self.reserve_on(side.other());
        if this_reserve.is_zero() || other_reserve.is_zero() {
            return Err(PoolError::InsufficientLiquidity);
        }
        crate::domain::Price::from_ratio(other_reserve, this_reserve)
    }

    // -- test support -------------------------------------------------------

    /// Verifies the structural invariants. Test-only.
    #[cfg(test)]
    fn invariants_hold(&self) -> bool {
        let emptiness_consistent = (self.reserve_x.is_zero() == self.total_shares.is_zero())
            && (self.reserve_y.is_zero() == self.total_shares.is_zero());
        let ledger_sum: u128 = self
            .shares_by_account
            .values()
            .map(|s| s.get())
            .fold(0u128, u128::saturating_add);
        let no_zero_entries = self.shares_by_account.values().all(|s| !s.is_zero());
        emptiness_consistent && ledger_sum == self.total_shares.get() && no_zero_entries
    }
}

#[cfg(test)]
mod proptest_properties;
