//! Realtime feed payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Decoded JSON frame from the realtime channel. The shape is defined by the publisher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RealtimeMessage(Value);

impl RealtimeMessage {
    /// Wraps a decoded value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Decodes a text frame.
    ///
    /// # Errors
    /// Returns the JSON error if the frame is not valid JSON.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text).map(Self)
    }

    /// Returns the decoded payload.
    #[must_use]
    pub const fn payload(&self) -> &Value {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_keeps_payload_verbatim() {
        let message = RealtimeMessage::parse(r#"{"table":"sales","x":"2024-01","y":42}"#).unwrap();
        assert_eq!(
            message.payload(),
            &json!({"table": "sales", "x": "2024-01", "y": 42})
        );
    }

    #[test]
    fn test_parse_rejects_malformed_frame() {
        assert!(RealtimeMessage::parse("{not json").is_err());
    }
}
