//! Indicator and insights port definitions.

use async_trait::async_trait;

use crate::domain::entities::KpiSnapshot;
use crate::domain::errors::ApiError;

/// Port for fetching the indicator snapshot.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KpiPort: Send + Sync {
    /// Fetches a fresh snapshot.
    async fn fetch_kpis(&self) -> Result<KpiSnapshot, ApiError>;
}

/// Port for the free-text analytics endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InsightsPort: Send + Sync {
    /// Sends a question, returning the HTML fragment produced by the backend.
    async fn ask(&self, question: &str) -> Result<String, ApiError>;
}
