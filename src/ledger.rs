//! In-memory asset ledger.
//!
//! A self-contained [`AssetTransfer`] implementation backed by balance
//! maps. It exists for tests, doctests, and host prototyping: real
//! deployments supply their own transfer collaborator.

use std::collections::BTreeMap;

use parking_lot::Mutex;

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::TransferError;
use crate::traits::AssetTransfer;

#[derive(Debug, Default)]
struct Books {
    /// External balance per (asset, account).
    accounts: BTreeMap<(AssetId, AccountId), u128>,
    /// Pool custody per asset.
    custody: BTreeMap<AssetId, u128>,
}

/// Balance-map ledger with separate account balances and pool custody.
///
/// A `pull` debits the source account and credits custody; a `push`
/// does the reverse. A `pull` that exceeds the account's balance and a
/// `push` that exceeds custody are both refused, leaving every balance
/// untouched — the atomic success-or-failure the engine assumes of its
/// transfer collaborator.
///
/// # Examples
///
/// ```
/// use duopool::domain::{AccountId, Amount, AssetId};
/// use duopool::ledger::InMemoryLedger;
/// use duopool::traits::AssetTransfer;
///
/// let gold = AssetId::from_bytes([1u8; 32]);
/// let alice = AccountId::from_bytes([10u8; 32]);
///
/// let ledger = InMemoryLedger::new();
/// ledger.fund(gold, &alice, Amount::new(100));
///
/// assert!(ledger.pull(gold, &alice, Amount::new(60)).is_ok());
/// assert_eq!(ledger.balance_of(gold, &alice), Amount::new(40));
/// assert_eq!(ledger.custody_of(gold), Amount::new(60));
///
/// // Refusals leave balances untouched.
/// assert!(ledger.pull(gold, &alice, Amount::new(41)).is_err());
/// assert_eq!(ledger.balance_of(gold, &alice), Amount::new(40));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    books: Mutex<Books>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` of `asset` to `account`, saturating at the
    /// ledger's capacity.
    pub fn fund(&self, asset: AssetId, account: &AccountId, amount: Amount) {
        let mut books = self.books.lock();
        let balance = books.accounts.entry((asset, *account)).or_insert(0);
        *balance = balance.saturating_add(amount.get());
    }

    /// Returns `account`'s external balance of `asset`.
    #[must_use]
    pub fn balance_of(&self, asset: AssetId, account: &AccountId) -> Amount {
        let books = self.books.lock();
        Amount::new(books.accounts.get(&(asset, *account)).copied().unwrap_or(0))
    }

    /// Returns the pool-custody balance of `asset`.
    #[must_use]
    pub fn custody_of(&self, asset: AssetId) -> Amount {
        let books = self.books.lock();
        Amount::new(books.custody.get(&asset).copied().unwrap_or(0))
    }
}

impl AssetTransfer for InMemoryLedger {
    fn pull(&self, asset: AssetId, from: &AccountId, amount: Amount) -> Result<(), TransferError> {
        let mut books = self.books.lock();
        // Both new values are computed before either map is written, so
        // a refusal on either side leaves every balance untouched.
        let balance = books
            .accounts
            .get(&(asset, *from))
            .copied()
            .unwrap_or(0)
            .checked_sub(amount.get())
            .ok_or(TransferError::InsufficientBalance)?;
        let held = books
            .custody
            .get(&asset)
            .copied()
            .unwrap_or(0)
            .checked_add(amount.get())
            .ok_or(TransferError::Refused("custody balance overflow"))?;
        books.accounts.insert((asset, *from), balance);
        books.custody.insert(asset, held);
        Ok(())
    }

    fn push(&self, asset: AssetId, to: &AccountId, amount: Amount) -> Result<(), TransferError> {
        let mut books = self.books.lock();
        let held = books
            .custody
            .get(&asset)
            .copied()
            .unwrap_or(0)
            .checked_sub(amount.get())
            .ok_or(TransferError::InsufficientBalance)?;
        let balance = books
            .accounts
            .get(&(asset, *to))
            .copied()
            .unwrap_or(0)
            .checked_add(amount.get())
            .ok_or(TransferError::Refused("account balance overflow"))?;
        books.custody.insert(asset, held);
        books.accounts.insert((asset, *to), balance);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn gold() -> AssetId {
        AssetId::from_bytes([1u8; 32])
    }

    fn alice() -> AccountId {
        AccountId::from_bytes([10u8; 32])
    }

    fn bob() -> AccountId {
        AccountId::from_bytes([11u8; 32])
    }

    #[test]
    fn pull_moves_balance_into_custody() {
        let ledger = InMemoryLedger::new();
        ledger.fund(gold(), &alice(), Amount::new(100));

        let Ok(()) = ledger.pull(gold(), &alice(), Amount::new(30)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.balance_of(gold(), &alice()), Amount::new(70));
        assert_eq!(ledger.custody_of(gold()), Amount::new(30));
    }

    #[test]
    fn push_moves_custody_back() {
        let ledger = InMemoryLedger::new();
        ledger.fund(gold(), &alice(), Amount::new(100));
        let Ok(()) = ledger.pull(gold(), &alice(), Amount::new(100)) else {
            panic!("expected Ok");
        };

        let Ok(()) = ledger.push(gold(), &alice(), Amount::new(25)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.balance_of(gold(), &alice()), Amount::new(25));
        assert_eq!(ledger.custody_of(gold()), Amount::new(75));
    }

    #[test]
    fn overdraft_pull_refused_atomically() {
        let ledger = InMemoryLedger::new();
        ledger.fund(gold(), &alice(), Amount::new(10));

        assert_eq!(
            ledger.pull(gold(), &alice(), Amount::new(11)),
            Err(TransferError::InsufficientBalance)
        );
        assert_eq!(ledger.balance_of(gold(), &alice()), Amount::new(10));
        assert_eq!(ledger.custody_of(gold()), Amount::ZERO);
    }

    #[test]
    fn pull_into_saturated_custody_refused_atomically() {
        let ledger = InMemoryLedger::new();
        ledger.fund(gold(), &alice(), Amount::MAX);
        let Ok(()) = ledger.pull(gold(), &alice(), Amount::MAX) else {
            panic!("expected Ok");
        };

        // Custody is full: bob's pull must be refused with his balance
        // still intact, not debited first.
        ledger.fund(gold(), &bob(), Amount::new(5));
        assert_eq!(
            ledger.pull(gold(), &bob(), Amount::new(1)),
            Err(TransferError::Refused("custody balance overflow"))
        );
        assert_eq!(ledger.balance_of(gold(), &bob()), Amount::new(5));
        assert_eq!(ledger.custody_of(gold()), Amount::MAX);
    }

    #[test]
    fn push_into_saturated_account_refused_atomically() {
        let ledger = InMemoryLedger::new();
        ledger.fund(gold(), &bob(), Amount::new(10));
        let Ok(()) = ledger.pull(gold(), &bob(), Amount::new(10)) else {
            panic!("expected Ok");
        };
        ledger.fund(gold(), &alice(), Amount::MAX);

        // Alice's balance cannot grow: the push must be refused with
        // custody still intact, not debited first.
        assert_eq!(
            ledger.push(gold(), &alice(), Amount::new(1)),
            Err(TransferError::Refused("account balance overflow"))
        );
        assert_eq!(ledger.custody_of(gold()), Amount::new(10));
        assert_eq!(ledger.balance_of(gold(), &alice()), Amount::MAX);
    }

    #[test]
    fn push_beyond_custody_refused() {
        let ledger = InMemoryLedger::new();
        assert_eq!(
            ledger.push(gold(), &alice(), Amount::new(1)),
            Err(TransferError::InsufficientBalance)
        );
    }

    #[test]
    fn unfunded_account_has_zero_balance() {
        let ledger = InMemoryLedger::new();
        assert_eq!(ledger.balance_of(gold(), &alice()), Amount::ZERO);
    }
}
