//! Unified error types for the pool engine.
//!
//! All fallible operations across the crate return [`PoolError`] as their
//! error type. Every error is surfaced synchronously to the caller and
//! aborts the whole operation with zero state mutation; the pool remains
//! usable after any reported error.

use thiserror::Error;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = core::result::Result<T, PoolError>;

/// Reason an external transfer collaborator refused a `pull` or `push`.
///
/// Produced by [`AssetTransfer`](crate::traits::AssetTransfer)
/// implementations and wrapped into [`PoolError::TransferFailed`] by the
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransferError {
    /// The source account does not hold enough of the asset.
    #[error("source account balance is insufficient")]
    InsufficientBalance,

    /// The collaborator refused the transfer for a reason of its own.
    #[error("transfer refused: {0}")]
    Refused(&'static str),
}

/// Error type for every pool operation.
///
/// Variants map one-to-one onto the distinct failure modes of the
/// engine; callers can match on them to distinguish caller mistakes
/// (zero amounts, bad ratios) from environmental failures (refused
/// transfers) and arithmetic limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolError {
    /// Construction was attempted with equal or null asset identifiers.
    #[error("pool requires two distinct, non-null asset identifiers")]
    InvalidAssets,

    /// An input amount was zero where a positive amount is required.
    #[error("amount must be greater than zero")]
    ZeroAmount,

    /// A deposit would lower the pool's implied price (under-supplied Y).
    #[error("deposit ratio under-supplies asset Y for the current reserves")]
    InvalidRatio,

    /// A withdrawal named more shares than the caller holds.
    #[error("share amount exceeds the caller's recorded balance")]
    InvalidShareAmount,

    /// The pool is empty, or a computed amount rounded down to zero.
    #[error("insufficient liquidity for this operation")]
    InsufficientLiquidity,

    /// A swap's output amount rounded down to zero.
    #[error("swap would produce no output")]
    InsufficientOutputAmount,

    /// The named asset is neither of the two pooled assets.
    #[error("asset is not part of this pool")]
    UnknownAsset,

    /// The external transfer collaborator refused a pull or push.
    #[error("asset transfer failed: {0}")]
    TransferFailed(#[from] TransferError),

    /// A guarded intermediate computation exceeded the representable range.
    #[error("arithmetic overflow in pool computation")]
    ArithmeticOverflow,
}
