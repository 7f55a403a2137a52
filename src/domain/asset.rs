//! Chain-agnostic asset identifier.

/// A generic, chain-agnostic identifier for a fungible asset.
///
/// Wraps a fixed-size `[u8; 32]` byte array. The all-zero identifier is
/// reserved as the *null* asset and is rejected at pool construction;
/// every other 32-byte sequence is a valid identifier.
///
/// # Examples
///
/// ```
/// use duopool::domain::AssetId;
///
/// let id = AssetId::from_bytes([1u8; 32]);
/// assert_eq!(id.as_bytes(), [1u8; 32]);
/// assert!(!id.is_null());
/// assert!(AssetId::null().is_null());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns the all-zero (null) identifier.
    ///
    /// The null identifier never names a real asset; pool construction
    /// rejects it.
    #[must_use]
    pub const fn null() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` if this is the null identifier.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0 == [0u8; 32]
    }
}
