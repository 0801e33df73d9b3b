//! Realtime push-update channel over WebSocket.

mod client;
mod connection;
mod constants;
mod state;

pub use client::{RealtimeClient, RealtimeClientConfig};
pub use connection::{FeedConnection, WebSocketConnection};
pub use constants::{DEFAULT_REALTIME_URL, MAX_RECONNECT_ATTEMPTS};
pub use state::ChannelState;
