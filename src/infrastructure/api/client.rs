//! Analytics backend HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, header};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{ErrorResponse, InsightsResponse};
use crate::domain::entities::KpiSnapshot;
use crate::domain::errors::ApiError;
use crate::domain::ports::{InsightsPort, KpiPort};

/// Production backend.
pub const DEFAULT_BASE_URL: &str = "https://analystic.a";

const KPIS_PATH: &str = "/api/kpis";
const INSIGHTS_PATH: &str = "/insights";
const SESSION_COOKIE: &str = "access_token";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the indicator and insights endpoints.
pub struct AnalyticsClient {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl AnalyticsClient {
    /// Creates client with default base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates client with custom base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates client with custom base URL and request timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: None,
        })
    }

    /// Sends the session cookie issued by the backend login with every request.
    #[must_use]
    pub fn with_access_token(mut self, token: Option<String>) -> Self {
        self.access_token = token.filter(|t| !t.is_empty());
        self
    }

    /// Returns the base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let request = self.client.get(format!("{}{path}", self.base_url));
        match &self.access_token {
            Some(token) => request.header(header::COOKIE, format!("{SESSION_COOKIE}={token}")),
            None => request,
        }
    }
}

async fn handle_error_response(status: StatusCode, response: Response) -> ApiError {
    let message = match response.json::<ErrorResponse>().await {
        Ok(error) => error.detail,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown status")
            .to_string(),
    };

    warn!(status = status.as_u16(), message = %message, "Backend rejected request");
    ApiError::status(status.as_u16(), message)
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let response = request.send().await.map_err(|e| {
        warn!(error = %e, "Failed to reach analytics backend");
        map_transport_error(&e)
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(handle_error_response(status, response).await);
    }

    response.json::<T>().await.map_err(|e| {
        warn!(error = %e, "Failed to parse backend response");
        ApiError::decode(e.to_string())
    })
}

fn map_transport_error(e: &reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else if e.is_connect() {
        ApiError::network("failed to connect to analytics backend")
    } else if e.is_decode() {
        ApiError::decode(e.to_string())
    } else {
        ApiError::network(e.to_string())
    }
}

#[async_trait]
impl KpiPort for AnalyticsClient {
    async fn fetch_kpis(&self) -> Result<KpiSnapshot, ApiError> {
        debug!("Fetching indicator snapshot");

        let snapshot: KpiSnapshot = send_json(self.get(KPIS_PATH)).await?;

        debug!(
            members = snapshot.members,
            partners = snapshot.partners,
            "Indicator snapshot received"
        );
        Ok(snapshot)
    }
}

#[async_trait]
impl InsightsPort for AnalyticsClient {
    async fn ask(&self, question: &str) -> Result<String, ApiError> {
        debug!(length = question.len(), "Requesting insights");

        let request = self.get(INSIGHTS_PATH).query(&[("question", question)]);
        let response: InsightsResponse = send_json(request).await?;

        Ok(response.into_text())
    }
}
