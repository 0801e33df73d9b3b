//! Free-text questions to the analytics endpoint.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::view::ViewBinding;
use crate::domain::entities::SlotId;
use crate::domain::errors::ApiError;
use crate::domain::ports::InsightsPort;

/// Forwards a question to the insights endpoint and shows the answer.
///
/// The answer is backend-produced HTML and is written to the
/// `ai-response` slot unmodified.
pub struct AiQueryBridge {
    insights: Arc<dyn InsightsPort>,
    view: ViewBinding,
}

impl AiQueryBridge {
    /// Creates a bridge writing into `view`.
    #[must_use]
    pub fn new(insights: Arc<dyn InsightsPort>, view: ViewBinding) -> Self {
        Self { insights, view }
    }

    /// Asks a question. Absent or empty input is ignored without a request.
    ///
    /// Returns the answer when a request was made.
    ///
    /// # Errors
    /// Returns error if the request or decoding fails.
    pub async fn ask_question(&self, input: Option<&str>) -> Result<Option<String>, ApiError> {
        let Some(question) = input.filter(|q| !q.is_empty()) else {
            debug!("Empty question, nothing to ask");
            return Ok(None);
        };

        let html = self.insights.ask(question).await.inspect_err(|e| {
            warn!(error = %e, "Insights request failed");
        })?;

        self.view.write(SlotId::AiResponse, &html);
        Ok(Some(html))
    }
}
