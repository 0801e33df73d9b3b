use std::time::Instant;

use crate::domain::connection::ConnectionStatus;

/// Bookkeeping for one realtime channel task.
pub struct ChannelState {
    status: ConnectionStatus,
    connected_at: Option<Instant>,
    reconnect_attempts: u32,
    messages_received: u64,
}

impl ChannelState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: ConnectionStatus::Disconnected,
            connected_at: None,
            reconnect_attempts: 0,
            messages_received: 0,
        }
    }

    #[must_use]
    pub const fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub const fn transition_to_connecting(&mut self) {
        self.status = ConnectionStatus::Connecting;
    }

    pub fn transition_to_connected(&mut self) {
        self.status = ConnectionStatus::Connected;
        self.connected_at = Some(Instant::now());
        self.reconnect_attempts = 0;
    }

    pub const fn transition_to_failed(&mut self) {
        self.status = ConnectionStatus::Failed;
        self.connected_at = None;
    }

    pub const fn transition_to_reconnecting(&mut self) -> u32 {
        self.reconnect_attempts += 1;
        self.status = ConnectionStatus::Reconnecting {
            attempt: self.reconnect_attempts,
        };
        self.reconnect_attempts
    }

    pub const fn transition_to_disconnected(&mut self) {
        self.status = ConnectionStatus::Disconnected;
        self.connected_at = None;
    }

    pub const fn record_message(&mut self) {
        self.messages_received += 1;
    }

    #[must_use]
    pub const fn messages_received(&self) -> u64 {
        self.messages_received
    }

    #[must_use]
    pub const fn reconnect_attempts(&self) -> u32 {
        self.reconnect_attempts
    }

    #[must_use]
    pub fn uptime(&self) -> Option<std::time::Duration> {
        self.connected_at.map(|start| start.elapsed())
    }
}

impl Default for ChannelState {
    fn default() -> Self {
        Self::new()
    }
}
