//! Core abstractions at the engine's seams.
//!
//! The engine depends on two collaborator interfaces supplied by the
//! host environment: [`AssetTransfer`] moves asset balances in and out
//! of the pool's custody, and [`EventSink`] consumes the notifications
//! each completed operation emits.

mod sink;
mod transfer;

pub use sink::EventSink;
pub use transfer::AssetTransfer;
