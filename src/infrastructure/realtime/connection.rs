use async_trait::async_trait;
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, trace};

use super::constants::CONNECTION_TIMEOUT;
use crate::domain::entities::RealtimeMessage;
use crate::domain::errors::{ChannelError, ChannelResult};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;
type WsWriter = SplitSink<WsStream, WsMessage>;
type WsReader = SplitStream<WsStream>;

/// Receive-only transport for the realtime feed.
#[async_trait]
pub trait FeedConnection: Send + Sync {
    async fn connect(&mut self, url: &str) -> ChannelResult<()>;
    async fn disconnect(&mut self) -> ChannelResult<()>;
    /// Waits for the next decoded message. `ChannelError::Decode` leaves the connection usable.
    async fn receive(&mut self) -> ChannelResult<RealtimeMessage>;
    fn is_connected(&self) -> bool;
}

pub struct WebSocketConnection {
    writer: Option<WsWriter>,
    reader: Option<WsReader>,
    connected: bool,
}

impl WebSocketConnection {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            writer: None,
            reader: None,
            connected: false,
        }
    }
}

impl Default for WebSocketConnection {
    fn default() -> Self {
        Self::new()
    }
}

fn decode(bytes: &[u8]) -> ChannelResult<RealtimeMessage> {
    serde_json::from_slice(bytes)
        .map(RealtimeMessage::new)
        .map_err(|e| ChannelError::decode(e.to_string()))
}

#[async_trait]
impl FeedConnection for WebSocketConnection {
    async fn connect(&mut self, url: &str) -> ChannelResult<()> {
        let (ws_stream, _) = timeout(CONNECTION_TIMEOUT, connect_async(url))
            .await
            .map_err(|_| ChannelError::timeout("connection"))?
            .map_err(|e| ChannelError::connection_failed(e.to_string()))?;

        let (writer, reader) = ws_stream.split();
        self.writer = Some(writer);
        self.reader = Some(reader);
        self.connected = true;

        debug!(url, "WebSocket connected");
        Ok(())
    }

    async fn disconnect(&mut self) -> ChannelResult<()> {
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.close().await;
        }
        self.reader = None;
        self.connected = false;
        debug!("WebSocket connection closed");
        Ok(())
    }

    async fn receive(&mut self) -> ChannelResult<RealtimeMessage> {
        let reader = self.reader.as_mut().ok_or(ChannelError::NotConnected)?;

        loop {
            match reader.next().await {
                Some(Ok(WsMessage::Text(text))) => {
                    trace!(len = text.len(), "Text frame received");
                    return decode(text.as_bytes());
                }
                Some(Ok(WsMessage::Binary(data))) => {
                    trace!(len = data.len(), "Binary frame received");
                    return decode(&data);
                }
                Some(Ok(WsMessage::Close(frame))) => {
                    self.connected = false;
                    let (code, reason) = frame.map_or_else(
                        || (1000, "Normal closure".to_string()),
                        |f| (f.code.into(), f.reason.to_string()),
                    );

                    return Err(ChannelError::ConnectionClosed { code, reason });
                }
                Some(Ok(WsMessage::Ping(data))) => {
                    if let Some(writer) = self.writer.as_mut() {
                        let _ = writer.send(WsMessage::Pong(data)).await;
                    }
                }
                Some(Ok(WsMessage::Pong(_) | WsMessage::Frame(_))) => {}
                Some(Err(e)) => {
                    self.connected = false;
                    return Err(ChannelError::websocket(e.to_string()));
                }
                None => {
                    self.connected = false;
                    return Err(ChannelError::ConnectionClosed {
                        code: 1006,
                        reason: "Stream ended".to_string(),
                    });
                }
            }
        }
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_websocket_connection_initial_state() {
        let conn = WebSocketConnection::new();
        assert!(!conn.is_connected());
    }

    #[tokio::test]
    async fn test_receive_before_connect() {
        let mut conn = WebSocketConnection::new();
        assert!(matches!(
            conn.receive().await,
            Err(ChannelError::NotConnected)
        ));
    }

    #[test]
    fn test_decode_frame() {
        let message = decode(br#"{"x":1}"#).unwrap();
        assert_eq!(message.payload()["x"], 1);

        let err = decode(b"{\"x\":").unwrap_err();
        assert!(err.is_decode());
    }
}
