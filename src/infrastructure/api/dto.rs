use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::format_number;

/// `GET /insights` response body.
#[derive(Debug, Deserialize)]
pub struct InsightsResponse {
    /// HTML fragment answering the question. Usually a string, but any JSON value is shown.
    #[serde(default)]
    pub insights: Value,
}

impl InsightsResponse {
    /// Text written to the response slot. Strings pass through verbatim;
    /// `null` shows as `null` and other values as their JSON text.
    #[must_use]
    pub fn into_text(self) -> String {
        match self.insights {
            Value::String(html) => html,
            Value::Number(number) => number
                .as_f64()
                .map_or_else(|| number.to_string(), format_number),
            other => other.to_string(),
        }
    }
}

/// Error body the backend returns alongside non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Error message.
    pub detail: String,
}
