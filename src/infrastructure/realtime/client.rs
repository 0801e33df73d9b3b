use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::{Notify, mpsc};
use tokio::time::sleep;
use tracing::{error, info, warn};

use super::connection::{FeedConnection, WebSocketConnection};
use super::constants::{
    DEFAULT_REALTIME_URL, MAX_RECONNECT_ATTEMPTS, RECONNECT_DELAY_BASE, RECONNECT_DELAY_MAX,
    RECONNECT_JITTER_MAX,
};
use super::state::ChannelState;
use crate::domain::errors::{ChannelError, ChannelResult};
use crate::domain::ports::{RealtimeEvent, RealtimePort};

#[derive(Debug, Clone)]
pub struct RealtimeClientConfig {
    pub url: String,
    pub auto_reconnect: bool,
    pub max_reconnect_attempts: u32,
}

impl Default for RealtimeClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_REALTIME_URL.to_string(),
            auto_reconnect: false,
            max_reconnect_attempts: MAX_RECONNECT_ATTEMPTS,
        }
    }
}

impl RealtimeClientConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    #[must_use]
    pub const fn with_auto_reconnect(mut self, enabled: bool) -> Self {
        self.auto_reconnect = enabled;
        self
    }

    #[must_use]
    pub const fn with_max_reconnect_attempts(mut self, attempts: u32) -> Self {
        self.max_reconnect_attempts = attempts;
        self
    }
}

/// Stop signal and liveness flag owned by a single subscription task.
#[derive(Default)]
struct Subscription {
    running: AtomicBool,
    shutdown: Notify,
}

impl Subscription {
    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
        self.shutdown.notify_one();
    }
}

/// Push-update channel running in a background task.
///
/// Each call to [`subscribe`](RealtimePort::subscribe) gets its own task and
/// stop signal, so a finishing task never affects a later subscription.
pub struct RealtimeClient {
    config: RealtimeClientConfig,
    active: Option<Arc<Subscription>>,
}

impl RealtimeClient {
    #[must_use]
    pub const fn new(config: RealtimeClientConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    #[must_use]
    pub fn with_default_config() -> Self {
        Self::new(RealtimeClientConfig::default())
    }

    #[must_use]
    pub const fn config(&self) -> &RealtimeClientConfig {
        &self.config
    }
}

impl RealtimePort for RealtimeClient {
    fn subscribe(&mut self) -> ChannelResult<mpsc::UnboundedReceiver<RealtimeEvent>> {
        if self.is_running() {
            return Err(ChannelError::AlreadyConnected);
        }

        let subscription = Arc::new(Subscription::default());
        subscription.running.store(true, Ordering::SeqCst);
        self.active = Some(subscription.clone());

        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let config = self.config.clone();

        tokio::spawn(async move {
            run_feed_loop(&config, &event_tx, &subscription).await;
            subscription.running.store(false, Ordering::SeqCst);
            drop(event_tx);
        });

        Ok(event_rx)
    }

    fn disconnect(&self) {
        if let Some(subscription) = &self.active {
            subscription.stop();
        }
    }

    fn is_running(&self) -> bool {
        self.active.as_ref().is_some_and(|subscription| subscription.is_running())
    }
}

async fn run_feed_loop(
    config: &RealtimeClientConfig,
    event_tx: &mpsc::UnboundedSender<RealtimeEvent>,
    subscription: &Subscription,
) {
    let mut state = ChannelState::new();

    while subscription.is_running() {
        state.transition_to_connecting();
        let _ = event_tx.send(RealtimeEvent::Status(state.status()));

        let mut connection = WebSocketConnection::new();
        let failure = match connection.connect(&config.url).await {
            Ok(()) => {
                info!(url = %config.url, "Realtime channel connected");
                state.transition_to_connected();
                let _ = event_tx.send(RealtimeEvent::Status(state.status()));

                let result =
                    pump_messages(&mut connection, event_tx, subscription, &mut state).await;
                let _ = connection.disconnect().await;

                match result {
                    Ok(()) => break,
                    Err(e) => {
                        warn!(
                            error = %e,
                            close_code = e.close_code(),
                            received = state.messages_received(),
                            uptime_secs = state.uptime().map(|uptime| uptime.as_secs()),
                            "Realtime channel lost"
                        );
                        e
                    }
                }
            }
            Err(e) => {
                error!(url = %config.url, error = %e, "Failed to connect to realtime channel");
                e
            }
        };

        state.transition_to_failed();
        let _ = event_tx.send(RealtimeEvent::Closed {
            reason: failure.to_string(),
        });
        let _ = event_tx.send(RealtimeEvent::Status(state.status()));

        if !subscription.is_running()
            || !config.auto_reconnect
            || !failure.should_reconnect()
        {
            return;
        }

        if state.reconnect_attempts() >= config.max_reconnect_attempts {
            let limit = ChannelError::ReconnectionLimitExceeded {
                attempts: state.reconnect_attempts(),
            };
            error!(error = %limit, "Giving up on realtime channel");
            let _ = event_tx.send(RealtimeEvent::Closed {
                reason: limit.to_string(),
            });
            return;
        }

        let attempt = state.transition_to_reconnecting();
        let delay = calculate_backoff_delay(attempt);
        info!(
            attempt,
            delay_ms = delay.as_millis(),
            "Reconnecting to realtime channel"
        );
        let _ = event_tx.send(RealtimeEvent::Status(state.status()));

        tokio::select! {
            () = sleep(delay) => {}
            () = subscription.shutdown.notified() => break,
        }
    }

    state.transition_to_disconnected();
    let _ = event_tx.send(RealtimeEvent::Status(state.status()));
    info!("Realtime loop terminated");
}

/// Forwards messages until shutdown (`Ok`) or a channel failure (`Err`).
async fn pump_messages(
    connection: &mut WebSocketConnection,
    event_tx: &mpsc::UnboundedSender<RealtimeEvent>,
    subscription: &Subscription,
    state: &mut ChannelState,
) -> ChannelResult<()> {
    while subscription.is_running() {
        tokio::select! {
            () = subscription.shutdown.notified() => return Ok(()),
            result = connection.receive() => match result {
                Ok(message) => {
                    state.record_message();
                    if event_tx.send(RealtimeEvent::Message(message)).is_err() {
                        // receiver dropped, nobody is listening anymore
                        return Ok(());
                    }
                }
                Err(e) if e.is_decode() => {
                    warn!(error = %e, "Malformed realtime frame");
                    let _ = event_tx.send(RealtimeEvent::DecodeFailed {
                        error: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            },
        }
    }

    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn calculate_backoff_delay(attempt: u32) -> Duration {
    let base_delay = RECONNECT_DELAY_BASE.as_millis() as u64;
    let max_delay = RECONNECT_DELAY_MAX.as_millis() as u64;
    let jitter_max = RECONNECT_JITTER_MAX.as_millis() as u64;

    let exponential_delay = base_delay.saturating_mul(2_u64.saturating_pow(attempt.min(6)));
    let capped_delay = exponential_delay.min(max_delay);

    Duration::from_millis(capped_delay.saturating_add(rand_jitter(jitter_max)))
}

fn rand_jitter(max: u64) -> u64 {
    use std::time::SystemTime;

    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| u64::from(d.subsec_nanos()))
        .unwrap_or(0);

    nanos % max.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::connection::ConnectionStatus;
    use futures_util::{SinkExt, StreamExt};
    use serde_json::json;
    use tokio::net::TcpListener;
    use tokio_tungstenite::accept_async;
    use tokio_tungstenite::tungstenite::Message as WsMessage;

    async fn serve_frames(frames: Vec<&'static str>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let mut ws = accept_async(stream).await.unwrap();
            for frame in frames {
                ws.send(WsMessage::Text(frame.into())).await.unwrap();
            }
            ws.close(None).await.unwrap();
        });

        format!("ws://{addr}")
    }

    async fn serve_idle_connections() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                tokio::spawn(async move {
                    let Ok(mut ws) = accept_async(stream).await else {
                        return;
                    };
                    while let Some(Ok(_)) = ws.next().await {}
                });
            }
        });

        format!("ws://{addr}")
    }

    async fn wait_connected(rx: &mut mpsc::UnboundedReceiver<RealtimeEvent>) -> bool {
        let wait = async {
            while let Some(event) = rx.recv().await {
                if event == RealtimeEvent::Status(ConnectionStatus::Connected) {
                    return true;
                }
            }
            false
        };
        tokio::time::timeout(Duration::from_secs(5), wait)
            .await
            .unwrap_or(false)
    }

    async fn collect(mut rx: mpsc::UnboundedReceiver<RealtimeEvent>) -> Vec<RealtimeEvent> {
        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }
        events
    }

    #[test]
    fn test_config_builder() {
        let config = RealtimeClientConfig::new()
            .with_url("ws://localhost:8765")
            .with_auto_reconnect(true)
            .with_max_reconnect_attempts(5);

        assert_eq!(config.url, "ws://localhost:8765");
        assert!(config.auto_reconnect);
        assert_eq!(config.max_reconnect_attempts, 5);
    }

    #[test]
    fn test_reconnect_disabled_by_default() {
        let config = RealtimeClientConfig::default();
        assert!(!config.auto_reconnect);
        assert_eq!(config.url, DEFAULT_REALTIME_URL);
    }

    #[test]
    fn test_backoff_delay() {
        let delay1 = calculate_backoff_delay(1);
        let delay3 = calculate_backoff_delay(3);

        assert!(delay1 >= Duration::from_secs(2));
        assert!(delay3 >= Duration::from_secs(8));
        assert!(calculate_backoff_delay(100) <= RECONNECT_DELAY_MAX + RECONNECT_JITTER_MAX);
    }

    #[test]
    fn test_client_initial_state() {
        let client = RealtimeClient::with_default_config();
        assert!(!client.is_running());
    }

    #[tokio::test]
    async fn test_messages_forwarded_and_malformed_frames_skipped() {
        let url = serve_frames(vec![r#"{"x":1}"#, "not json", r#"{"table":"sales","x":3,"y":4}"#]).await;
        let mut client = RealtimeClient::new(RealtimeClientConfig::new().with_url(url));

        let events = collect(client.subscribe().unwrap()).await;

        assert_eq!(
            events[0],
            RealtimeEvent::Status(ConnectionStatus::Connecting)
        );
        assert_eq!(events[1], RealtimeEvent::Status(ConnectionStatus::Connected));

        let messages: Vec<_> = events
            .iter()
            .filter_map(|event| match event {
                RealtimeEvent::Message(message) => Some(message.payload().clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            messages,
            vec![json!({"x": 1}), json!({"table": "sales", "x": 3, "y": 4})]
        );

        assert!(events
            .iter()
            .any(|event| matches!(event, RealtimeEvent::DecodeFailed { .. })));
        assert!(events
            .iter()
            .any(|event| matches!(event, RealtimeEvent::Closed { .. })));
        assert_eq!(
            events.last(),
            Some(&RealtimeEvent::Status(ConnectionStatus::Failed))
        );
        assert!(!client.is_running());
    }

    #[tokio::test]
    async fn test_connection_refused_fails_without_reconnect() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let mut client =
            RealtimeClient::new(RealtimeClientConfig::new().with_url(format!("ws://{addr}")));
        let events = collect(client.subscribe().unwrap()).await;

        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0],
            RealtimeEvent::Status(ConnectionStatus::Connecting)
        );
        assert!(matches!(
            &events[1],
            RealtimeEvent::Closed { reason } if reason.starts_with("connection failed")
        ));
        assert_eq!(events[2], RealtimeEvent::Status(ConnectionStatus::Failed));
    }

    #[tokio::test]
    async fn test_second_subscribe_rejected_while_running() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let mut client =
            RealtimeClient::new(RealtimeClientConfig::new().with_url(format!("ws://{addr}")));
        let _rx = client.subscribe().unwrap();

        assert!(matches!(
            client.subscribe(),
            Err(ChannelError::AlreadyConnected)
        ));

        client.disconnect();
        drop(listener);
    }

    #[tokio::test]
    async fn test_resubscribe_after_disconnect_survives_old_task() {
        let url = serve_idle_connections().await;
        let mut client = RealtimeClient::new(RealtimeClientConfig::new().with_url(url));

        let mut first = client.subscribe().unwrap();
        assert!(wait_connected(&mut first).await);

        client.disconnect();
        let mut second = client.subscribe().unwrap();

        let first_events = collect(first).await;
        assert_eq!(
            first_events.last(),
            Some(&RealtimeEvent::Status(ConnectionStatus::Disconnected))
        );

        assert!(wait_connected(&mut second).await);
        assert!(client.is_running());

        client.disconnect();
        let second_events = collect(second).await;
        assert_eq!(
            second_events.last(),
            Some(&RealtimeEvent::Status(ConnectionStatus::Disconnected))
        );
        assert!(!client.is_running());
    }
}
