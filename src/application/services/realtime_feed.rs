//! Forwarding of realtime channel messages to a rendering hook.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::domain::connection::ConnectionStatus;
use crate::domain::errors::ChannelResult;
use crate::domain::ports::{RealtimeEvent, RealtimePort, RealtimeRenderer};

/// Consumes realtime events and hands messages to the registered renderer.
///
/// Without a renderer, messages are dropped silently.
pub struct RealtimeFeed {
    renderer: Option<Arc<dyn RealtimeRenderer>>,
    status: ConnectionStatus,
    rendered: u64,
    dropped: u64,
    malformed: u64,
}

impl RealtimeFeed {
    /// Creates a feed with an optional rendering hook.
    #[must_use]
    pub fn new(renderer: Option<Arc<dyn RealtimeRenderer>>) -> Self {
        Self {
            renderer,
            status: ConnectionStatus::Disconnected,
            rendered: 0,
            dropped: 0,
            malformed: 0,
        }
    }

    /// Last reported channel status.
    #[must_use]
    pub const fn status(&self) -> ConnectionStatus {
        self.status
    }

    /// Messages passed to the renderer.
    #[must_use]
    pub const fn rendered(&self) -> u64 {
        self.rendered
    }

    /// Messages discarded for lack of a renderer.
    #[must_use]
    pub const fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Frames that failed to decode.
    #[must_use]
    pub const fn malformed(&self) -> u64 {
        self.malformed
    }

    /// Opens the channel and forwards events until it closes.
    ///
    /// # Errors
    /// Returns error if the subscription cannot be opened.
    pub async fn subscribe_realtime(&mut self, port: &mut dyn RealtimePort) -> ChannelResult<()> {
        let events = port.subscribe()?;
        self.run(events).await;
        Ok(())
    }

    /// Drains an event stream.
    pub async fn run(&mut self, mut events: mpsc::UnboundedReceiver<RealtimeEvent>) {
        while let Some(event) = events.recv().await {
            self.handle_event(event);
        }
        debug!(
            rendered = self.rendered,
            dropped = self.dropped,
            "Realtime event stream ended"
        );
    }

    /// Handles one event.
    pub fn handle_event(&mut self, event: RealtimeEvent) {
        match event {
            RealtimeEvent::Status(status) => {
                if status.is_terminal() {
                    info!(status = %status, rendered = self.rendered, "Realtime channel stopped");
                } else {
                    debug!(status = %status, "Realtime channel status changed");
                }
                self.status = status;
            }
            RealtimeEvent::Message(message) => match &self.renderer {
                Some(renderer) => {
                    renderer.render(&message);
                    self.rendered += 1;
                }
                None => self.dropped += 1,
            },
            RealtimeEvent::DecodeFailed { error } => {
                warn!(error = %error, "Discarding malformed realtime message");
                self.malformed += 1;
            }
            RealtimeEvent::Closed { reason } => {
                warn!(reason = %reason, "Realtime channel closed");
            }
        }
    }
}
