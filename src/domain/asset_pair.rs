//! Positional pair of distinct pooled assets.

use super::AssetId;
use crate::error::PoolError;

/// Which of the two pooled reserves an operation touches.
///
/// The pool's reserves are positional: `X` is always the first asset
/// the pool was constructed with, `Y` the second. `Side` lets the
/// reserve bookkeeping stay independent of asset identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The first pooled asset.
    X,
    /// The second pooled asset.
    Y,
}

impl Side {
    /// Returns the opposite side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// The two distinct, non-null assets a pool trades between.
///
/// Unlike canonically-sorted token pairs, `AssetPair` is positional:
/// the first constructor argument is asset X and the second is asset Y
/// for the lifetime of the pool, matching the positional reserves.
///
/// # Examples
///
/// ```
/// use duopool::domain::{AssetId, AssetPair, Side};
///
/// let x = AssetId::from_bytes([1u8; 32]);
/// let y = AssetId::from_bytes([2u8; 32]);
/// let pair = AssetPair::new(x, y).expect("distinct assets");
///
/// assert_eq!(pair.x(), x);
/// assert_eq!(pair.side_of(y), Ok(Side::Y));
/// assert_eq!(pair.asset_on(Side::X), x);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetPair {
    x: AssetId,
    y: AssetId,
}

impl AssetPair {
    /// Creates a new asset pair.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAssets`] if the identifiers are
    /// equal or either is the null identifier.
    pub fn new(x: AssetId, y: AssetId) -> Result<Self, PoolError> {
        if x == y || x.is_null() || y.is_null() {
            return Err(PoolError::InvalidAssets);
        }
        Ok(Self { x, y })
    }

    /// Returns asset X (the first constructor argument).
    #[must_use]
    pub const fn x(&self) -> AssetId {
        self.x
    }

    /// Returns asset Y (the second constructor argument).
    #[must_use]
    pub const fn y(&self) -> AssetId {
        self.y
    }

    /// Returns `true` if `asset` is one of the two pooled assets.
    #[must_use]
    pub fn contains(&self, asset: AssetId) -> bool {
        self.x == asset || self.y == asset
    }

    /// Maps an asset identifier to its reserve side.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::UnknownAsset`] if `asset` is neither pooled
    /// asset.
    pub fn side_of(&self, asset: AssetId) -> Result<Side, PoolError> {
        if asset == self.x {
            Ok(Side::X)
        } else if asset == self.y {
            Ok(Side::Y)
        } else {
            Err(PoolError::UnknownAsset)
        }
    }

    /// Returns the asset identifier on the given side.
    #[must_use]
    pub const fn asset_on(&self, side: Side) -> AssetId {
        match side {
            Side::X => self.x,
            Side::Y => self.y,
        }
    }

    /// Returns the counterpart of `asset` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::UnknownAsset`] if `asset` is neither pooled
    /// asset.
    pub fn other(&self, asset: AssetId) -> Result<AssetId, PoolError> {
        Ok(self.asset_on(self.side_of(asset)?.other()))
    }
}
