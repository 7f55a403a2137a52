//! Fundamental domain value types used throughout the pool engine.
//!
//! All quantities are newtypes over unsigned integers with validated
//! constructors and checked arithmetic, so that invariants are enforced
//! at the type boundary rather than re-checked ad hoc inside the
//! engine.

mod account;
mod amount;
mod asset;
mod asset_pair;
mod price;
mod shares;

pub use account::AccountId;
pub use amount::Amount;
pub use asset::AssetId;
pub use asset_pair::{AssetPair, Side};
pub use price::Price;
pub use shares::Shares;
