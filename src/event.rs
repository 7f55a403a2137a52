//! Pool notifications and the sinks that consume them.

use parking_lot::Mutex;
use tracing::info;

use crate::domain::{AccountId, Amount, AssetId, Shares};
use crate::traits::EventSink;

/// Notification emitted after each completed pool operation.
///
/// Events describe only committed state transitions; a failed operation
/// emits nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolEvent {
    /// A deposit minted shares and grew both reserves.
    LiquidityAdded {
        /// Depositing account.
        account: AccountId,
        /// Asset X contributed.
        amount_x: Amount,
        /// Asset Y contributed.
        amount_y: Amount,
        /// Shares minted to the account.
        shares: Shares,
    },
    /// A withdrawal burned shares and shrank both reserves.
    LiquidityRemoved {
        /// Withdrawing account.
        account: AccountId,
        /// Asset X returned.
        amount_x: Amount,
        /// Asset Y returned.
        amount_y: Amount,
        /// Shares burned from the account.
        shares: Shares,
    },
    /// A swap traded one asset for the other.
    Swapped {
        /// Trading account.
        account: AccountId,
        /// Asset pulled into the pool.
        asset_in: AssetId,
        /// Asset pushed out of the pool.
        asset_out: AssetId,
        /// Input amount, fee included.
        amount_in: Amount,
        /// Output amount.
        amount_out: Amount,
    },
}

/// Publishes events as structured `tracing` events at `INFO` level.
///
/// The default sink for hosts that only want observability.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn publish(&self, event: PoolEvent) {
        match event {
            PoolEvent::LiquidityAdded {
                amount_x,
                amount_y,
                shares,
                ..
            } => info!(%amount_x, %amount_y, %shares, "liquidity added"),
            PoolEvent::LiquidityRemoved {
                amount_x,
                amount_y,
                shares,
                ..
            } => info!(%amount_x, %amount_y, %shares, "liquidity removed"),
            PoolEvent::Swapped {
                amount_in,
                amount_out,
                ..
            } => info!(%amount_in, %amount_out, "swapped"),
        }
    }
}

/// Records every published event for later inspection.
///
/// Intended for tests and demos: assert on [`MemorySink::take`] after
/// driving the engine.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<PoolEvent>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains and returns all recorded events in publication order.
    #[must_use]
    pub fn take(&self) -> Vec<PoolEvent> {
        core::mem::take(&mut *self.events.lock())
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Returns `true` if no events have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventSink for MemorySink {
    fn publish(&self, event: PoolEvent) {
        self.events.lock().push(event);
    }
}
