//! Notification consumer interface.

use crate::event::PoolEvent;

/// Consumes the notification emitted after each completed operation.
///
/// Sinks are fire-and-forget: the engine never consumes a return value
/// and a sink must not fail. Events are published only after the
/// operation's state mutation has committed, so observers never see an
/// event for an operation that was rolled back.
pub trait EventSink {
    /// Delivers one event to the sink.
    fn publish(&self, event: PoolEvent);
}
