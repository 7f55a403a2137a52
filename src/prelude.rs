//! Convenience re-exports for common types and traits.
//!
//! A single import brings the frequently used surface into scope:
//!
//! ```rust
//! use duopool::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{AccountId, Amount, AssetId, AssetPair, Price, Shares, Side};

// Re-export core traits
pub use crate::traits::{AssetTransfer, EventSink};

// Re-export error types
pub use crate::error::{PoolError, Result, TransferError};

// Re-export the engine and events
pub use crate::engine::PoolEngine;
pub use crate::event::PoolEvent;
