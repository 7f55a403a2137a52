//! The pool engine: serialized, all-or-nothing execution of pool
//! operations.
//!
//! [`PoolEngine`] wraps the pure [`Pool`] state machine with everything
//! the host environment interacts with: the asset pair, the state lock,
//! the external transfer collaborator, and the notification sink.
//!
//! # Execution model
//!
//! Every public operation acquires the state lock for its full
//! duration — including the external transfer calls — so no other
//! operation (and no nested call triggered by a transfer) can observe
//! or mutate intermediate state. Operations are staged: validation and
//! computation happen first against a snapshot of the reserves, then
//! the external transfers run, and only after they succeed is the
//! precomputed post-state committed. A failure at any step discards the
//! staged deltas entirely; the one already-completed transfer of a
//! two-transfer operation is compensated with the reverse transfer.

use parking_lot::Mutex;
use tracing::{debug, error};

use crate::domain::{AccountId, Amount, AssetId, AssetPair, Price, Shares};
use crate::error::{PoolError, Result};
use crate::event::PoolEvent;
use crate::pool::Pool;
use crate::traits::{AssetTransfer, EventSink};

/// Accounting and pricing engine for one two-asset pool.
///
/// Multiple engines can coexist; each owns its [`Pool`] exclusively for
/// the lifetime of the value. See the crate docs for a worked example.
#[derive(Debug)]
pub struct PoolEngine<T, S> {
    assets: AssetPair,
    state: Mutex<Pool>,
    transfers: T,
    sink: S,
}

impl<T, S> PoolEngine<T, S>
where
    T: AssetTransfer,
    S: EventSink,
{
    /// Creates an engine over an empty pool.
    ///
    /// `assets` already guarantees two distinct, non-null identifiers
    /// ([`AssetPair::new`] fails with
    /// [`PoolError::InvalidAssets`](crate::error::PoolError) otherwise).
    #[must_use]
    pub fn new(assets: AssetPair, transfers: T, sink: S) -> Self {
        Self {
            assets,
            state: Mutex::new(Pool::new()),
            transfers,
            sink,
        }
    }

    /// The pool's asset pair.
    #[must_use]
    pub const fn assets(&self) -> AssetPair {
        self.assets
    }

    /// The external transfer collaborator.
    #[must_use]
    pub const fn transfer_collaborator(&self) -> &T {
        &self.transfers
    }

    /// The notification sink.
    #[must_use]
    pub const fn event_sink(&self) -> &S {
        &self.sink
    }

    /// Current reserves `(x, y)`.
    #[must_use]
    pub fn reserves(&self) -> (Amount, Amount) {
        let pool = self.state.lock();
        (pool.reserve_x(), pool.reserve_y())
    }

    /// Sum of all outstanding shares.
    #[must_use]
    pub fn total_shares(&self) -> Shares {
        self.state.lock().total_shares()
    }

    /// The account's recorded share balance.
    #[must_use]
    pub fn shares_of(&self, account: &AccountId) -> Shares {
        self.state.lock().shares_of(account)
    }

    /// Deposits `amount_x` and `amount_y` into the pool and mints
    /// proportional ownership shares to `account`.
    ///
    /// Both amounts are pulled from the account's external balances
    /// before any state changes commit. The minted share count is
    /// `integer_sqrt(amount_x × amount_y)` for the first deposit and
    /// `amount_x × total_shares / reserve_x` afterwards; a seeded pool
    /// additionally requires `amount_y ≥ amount_x × reserve_y /
    /// reserve_x` (surplus Y is accepted without extra shares).
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroAmount`] if either amount is zero.
    /// - [`PoolError::InvalidRatio`] if the deposit under-supplies Y.
    /// - [`PoolError::InsufficientLiquidity`] on a dust deposit that
    ///   would mint nothing.
    /// - [`PoolError::TransferFailed`] if either pull is refused; no
    ///   state changes and any completed pull is pushed back.
    /// - [`PoolError::ArithmeticOverflow`] on unrepresentable values.
    pub fn add_liquidity(
        &self,
        account: &AccountId,
        amount_x: Amount,
        amount_y: Amount,
    ) -> Result<Shares> {
        let mut pool = self.state.lock();
        let plan = pool.plan_add_liquidity(account, amount_x, amount_y)?;

        self.transfers.pull(self.assets.x(), account, amount_x)?;
        if let Err(refusal) = self.transfers.pull(self.assets.y(), account, amount_y) {
            self.compensate_push(self.assets.x(), account, amount_x);
            return Err(refusal.into());
        }

        pool.apply_add_liquidity(account, &plan);
        debug!(
            %amount_x,
            %amount_y,
            minted = %plan.minted,
            total_shares = %pool.total_shares(),
            "liquidity added"
        );
        drop(pool);
        self.sink.publish(PoolEvent::LiquidityAdded {
            account: *account,
            amount_x,
            amount_y,
            shares: plan.minted,
        });
        Ok(plan.minted)
    }

    /// Burns `shares` from `account` and returns the proportional slice
    /// of both reserves.
    ///
    /// Amounts are `shares × reserve / total_shares` with truncating
    /// division (rounding in the pool's favour). Both pushes complete
    /// before the debit commits; a refused push rolls the whole
    /// operation back.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroAmount`] if `shares` is zero.
    /// - [`PoolError::InvalidShareAmount`] if `shares` exceeds the
    ///   account's balance.
    /// - [`PoolError::InsufficientLiquidity`] if either amount rounds
    ///   to zero.
    /// - [`PoolError::TransferFailed`] if either push is refused; any
    ///   completed push is pulled back.
    pub fn remove_liquidity(&self, account: &AccountId, shares: Shares) -> Result<(Amount, Amount)> {
        let mut pool = self.state.lock();
        let plan = pool.plan_remove_liquidity(account, shares)?;

        self.transfers.push(self.assets.x(), account, plan.amount_x)?;
        if let Err(refusal) = self.transfers.push(self.assets.y(), account, plan.amount_y) {
            self.compensate_pull(self.assets.x(), account, plan.amount_x);
            return Err(refusal.into());
        }

        pool.apply_remove_liquidity(account, &plan);
        debug!(
            amount_x = %plan.amount_x,
            amount_y = %plan.amount_y,
            burned = %plan.burned,
            total_shares = %pool.total_shares(),
            "liquidity removed"
        );
        drop(pool);
        self.sink.publish(PoolEvent::LiquidityRemoved {
            account: *account,
            amount_x: plan.amount_x,
            amount_y: plan.amount_y,
            shares: plan.burned,
        });
        Ok((plan.amount_x, plan.amount_y))
    }

    /// Swaps `amount_in` of `asset_in` for the other pooled asset at
    /// the constant-product price with a 0.3% fee on the input.
    ///
    /// # Errors
    ///
    /// - [`PoolError::UnknownAsset`] if `asset_in` is neither pooled
    ///   asset.
    /// - [`PoolError::ZeroAmount`] if `amount_in` is zero.
    /// - [`PoolError::InsufficientLiquidity`] if the pool is empty.
    /// - [`PoolError::InsufficientOutputAmount`] if the output rounds
    ///   to zero.
    /// - [`PoolError::TransferFailed`] if a transfer is refused; a
    ///   completed pull is pushed back.
    /// - [`PoolError::ArithmeticOverflow`] on unrepresentable
    ///   intermediates.
    pub fn swap(&self, account: &AccountId, amount_in: Amount, asset_in: AssetId) -> Result<Amount> {
        let side_in = self.assets.side_of(asset_in)?;
        let asset_out = self.assets.asset_on(side_in.other());

        let mut pool = self.state.lock();
        let plan = pool.plan_swap(side_in, amount_in)?;

        self.transfers.pull(asset_in, account, amount_in)?;
        if let Err(refusal) = self.transfers.push(asset_out, account, plan.amount_out) {
            self.compensate_push(asset_in, account, amount_in);
            return Err(refusal.into());
        }

        pool.apply_swap(&plan);
        debug!(
            side = ?plan.side_in,
            %amount_in,
            amount_out = %plan.amount_out,
            "swapped"
        );
        drop(pool);
        self.sink.publish(PoolEvent::Swapped {
            account: *account,
            asset_in,
            asset_out,
            amount_in,
            amount_out: plan.amount_out,
        });
        Ok(plan.amount_out)
    }

    /// Instantaneous price of `asset` in terms of the other pooled
    /// asset, scaled by [`Price::SCALE`]. Read-only.
    ///
    /// # Errors
    ///
    /// - [`PoolError::UnknownAsset`] if `asset` is neither pooled asset.
    /// - [`PoolError::InsufficientLiquidity`] if the pool is empty.
    /// - [`PoolError::ArithmeticOverflow`] if the scaled price exceeds
    ///   `u128`.
    pub fn price_of(&self, asset: AssetId) -> Result<Price> {
        let side = self.assets.side_of(asset)?;
        self.state.lock().spot_price(side)
    }

    /// Reverses a completed pull after a later step failed.
    ///
    /// A trusted-atomic collaborator accepts the reversal; if it does
    /// not, custody and the pool state disagree and only the host can
    /// reconcile them, so the fault is logged at error level.
    fn compensate_push(&self, asset: AssetId, account: &AccountId, amount: Amount) {
        if let Err(fault) = self.transfers.push(asset, account, amount) {
            error!(%amount, %fault, "compensating push refused; custody out of sync");
        }
    }

    /// Reverses a completed push after a later step failed.
    fn compensate_pull(&self, asset: AssetId, account: &AccountId, amount: Amount) {
        if let Err(fault) = self.transfers.pull(asset, account, amount) {
            error!(%amount, %fault, "compensating pull refused; custody out of sync");
        }
    }
}
