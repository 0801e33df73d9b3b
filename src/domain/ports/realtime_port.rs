//! Realtime channel port definition.

use tokio::sync::mpsc;

use crate::domain::connection::ConnectionStatus;
use crate::domain::entities::RealtimeMessage;
use crate::domain::errors::ChannelResult;

/// Event emitted by a realtime channel subscription.
#[derive(Debug, Clone, PartialEq)]
pub enum RealtimeEvent {
    /// Channel moved to a new lifecycle state.
    Status(ConnectionStatus),
    /// Decoded inbound message.
    Message(RealtimeMessage),
    /// Inbound frame that could not be decoded; the channel stays open.
    DecodeFailed {
        /// Decoder error.
        error: String,
    },
    /// Channel closed or failed.
    Closed {
        /// Close reason.
        reason: String,
    },
}

/// Port for subscribing to the push-update channel.
pub trait RealtimePort: Send + Sync {
    /// Opens the channel, returning the event stream.
    ///
    /// # Errors
    /// Returns error if a subscription is already active.
    fn subscribe(&mut self) -> ChannelResult<mpsc::UnboundedReceiver<RealtimeEvent>>;

    /// Closes the channel.
    fn disconnect(&self);

    /// Returns whether the channel task is still running.
    fn is_running(&self) -> bool;
}
