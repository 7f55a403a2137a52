//! External asset-transfer collaborator interface.

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::TransferError;

/// Moves asset balances between external accounts and the pool's
/// custody.
///
/// The engine treats every call as atomic: a `pull` or `push` either
/// fully completes or reports failure, with no partial movement. Calls
/// are synchronous and must not re-enter the engine — the engine holds
/// its state lock for the full duration of the operation that invoked
/// them, so a re-entrant call would deadlock rather than observe
/// intermediate state.
///
/// Implementations decide what "refused" means ([`TransferError`]);
/// the engine maps any refusal to
/// [`PoolError::TransferFailed`](crate::error::PoolError) and rolls the
/// operation back.
pub trait AssetTransfer {
    /// Moves `amount` of `asset` from `from`'s external balance into
    /// the pool's custody.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if the transfer is refused; no
    /// balance moves in that case.
    fn pull(&self, asset: AssetId, from: &AccountId, amount: Amount) -> Result<(), TransferError>;

    /// Moves `amount` of `asset` out of the pool's custody to `to`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if the transfer is refused; no
    /// balance moves in that case.
    fn push(&self, asset: AssetId, to: &AccountId, amount: Amount) -> Result<(), TransferError>;
}
