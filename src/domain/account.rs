//! Opaque account identifier.

/// An opaque identifier for an external account holding assets or pool
/// shares.
///
/// The engine never interprets the bytes; identity, authentication, and
/// key management belong to the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_round_trip() {
        let bytes = [7u8; 32];
        assert_eq!(AccountId::from_bytes(bytes).as_bytes(), bytes);
    }

    #[test]
    fn distinct_bytes_are_distinct_accounts() {
        assert_ne!(
            AccountId::from_bytes([1u8; 32]),
            AccountId::from_bytes([2u8; 32])
        );
    }
}
