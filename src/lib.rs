//! # Duopool
//!
//! Reserve/share accounting and constant-product pricing engine for a
//! two-asset AMM pool.
//!
//! The crate tracks a shared reserve of two fungible assets, issues
//! proportional ownership shares to liquidity providers, and executes
//! swaps under the `x · y = k` rule with a 0.3% fee taken from the
//! input. Asset movement, identity, and persistence are the host
//! environment's business: the engine consumes an
//! [`AssetTransfer`](traits::AssetTransfer) collaborator and publishes
//! [`PoolEvent`](event::PoolEvent)s to an
//! [`EventSink`](traits::EventSink).
//!
//! # Quick Start
//!
//! ```rust
//! use duopool::domain::{AccountId, Amount, AssetId, AssetPair};
//! use duopool::engine::PoolEngine;
//! use duopool::event::MemorySink;
//! use duopool::ledger::InMemoryLedger;
//!
//! let gold = AssetId::from_bytes([1u8; 32]);
//! let silver = AssetId::from_bytes([2u8; 32]);
//! let alice = AccountId::from_bytes([10u8; 32]);
//! let dave = AccountId::from_bytes([13u8; 32]);
//!
//! // 1. Stand up a ledger and fund the participants.
//! let ledger = InMemoryLedger::new();
//! ledger.fund(gold, &alice, Amount::new(1000));
//! ledger.fund(silver, &alice, Amount::new(4000));
//! ledger.fund(gold, &dave, Amount::new(100));
//!
//! // 2. Create the engine over the two assets.
//! let pair = AssetPair::new(gold, silver).expect("distinct assets");
//! let engine = PoolEngine::new(pair, ledger, MemorySink::new());
//!
//! // 3. Seed liquidity: the first deposit mints sqrt(1000 * 4000) shares.
//! let minted = engine
//!     .add_liquidity(&alice, Amount::new(1000), Amount::new(4000))
//!     .expect("deposit accepted");
//! assert_eq!(minted.get(), 2000);
//!
//! // 4. Swap 100 gold for silver at the constant-product price.
//! let out = engine.swap(&dave, Amount::new(100), gold).expect("swap ok");
//! assert_eq!(out.get(), 362);
//! assert_eq!(engine.reserves().0.get(), 1100);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │     Host      │  supplies AssetTransfer + EventSink
//! └──────┬───────┘
//!        │ add_liquidity / remove_liquidity / swap / price_of
//!        ▼
//! ┌──────────────┐
//! │  PoolEngine   │  state lock, staged commits, transfers, events
//! └──────┬───────┘
//!        │ plan → transfer → apply
//!        ▼
//! ┌──────────────┐
//! │     Pool      │  reserves, total shares, per-account ledger
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │  math/domain  │  U256 intermediates, integer sqrt, newtypes
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`AssetPair`](domain::AssetPair), [`Price`](domain::Price) |
//! | [`traits`] | Host-facing seams: [`AssetTransfer`](traits::AssetTransfer), [`EventSink`](traits::EventSink) |
//! | [`pool`] | The [`Pool`](pool::Pool) state machine with staged plan/apply mutations |
//! | [`engine`] | [`PoolEngine`](engine::PoolEngine): locking, transfers, commit, notifications |
//! | [`event`] | [`PoolEvent`](event::PoolEvent) plus tracing/memory sinks |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger) for tests and prototyping |
//! | [`math`] | 256-bit intermediates and the exact integer square root |
//! | [`error`] | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod domain;
pub mod engine;
pub mod error;
pub mod event;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;
