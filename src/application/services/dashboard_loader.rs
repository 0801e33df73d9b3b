//! Indicator snapshot loading.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::view::ViewBinding;
use crate::domain::entities::KpiSnapshot;
use crate::domain::errors::ApiError;
use crate::domain::ports::KpiPort;

/// Fetches the indicator snapshot and projects it onto the KPI slots.
pub struct DashboardLoader {
    kpis: Arc<dyn KpiPort>,
    view: ViewBinding,
}

impl DashboardLoader {
    /// Creates a loader writing into `view`.
    #[must_use]
    pub fn new(kpis: Arc<dyn KpiPort>, view: ViewBinding) -> Self {
        Self { kpis, view }
    }

    /// Fetches one snapshot and writes every field whose slot is bound.
    ///
    /// # Errors
    /// Returns error if the request or decoding fails. No slot is touched then.
    pub async fn load_indicators(&self) -> Result<KpiSnapshot, ApiError> {
        let snapshot = self.kpis.fetch_kpis().await.inspect_err(|e| {
            warn!(error = %e, "Failed to load indicators");
        })?;

        let mut written = 0;
        for (slot, text) in snapshot.display_entries() {
            if self.view.write(slot, &text) {
                written += 1;
            }
        }

        debug!(written, "Indicators rendered");
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SlotId;
    use crate::domain::ports::mocks::{MockKpiPort, RecordingSlot};
    use tokio_test::assert_err;

    fn kpi_port_returning(snapshot: KpiSnapshot) -> Arc<MockKpiPort> {
        let mut port = MockKpiPort::new();
        port.expect_fetch_kpis()
            .times(1)
            .returning(move || Ok(snapshot));
        Arc::new(port)
    }

    #[tokio::test]
    async fn test_load_writes_all_slots() {
        let members = RecordingSlot::new();
        let cashback = RecordingSlot::new();
        let partners = RecordingSlot::new();
        let revenue = RecordingSlot::new();
        let view = ViewBinding::new()
            .bind(SlotId::KpiMembers, Arc::new(members.clone()))
            .bind(SlotId::KpiCashback, Arc::new(cashback.clone()))
            .bind(SlotId::KpiPartners, Arc::new(partners.clone()))
            .bind(SlotId::KpiRevenue, Arc::new(revenue.clone()));

        let port = kpi_port_returning(KpiSnapshot::new(12.0, 340.5, 4.0, 9000.0));
        let loader = DashboardLoader::new(port, view);

        loader.load_indicators().await.unwrap();

        assert_eq!(members.last().as_deref(), Some("12"));
        assert_eq!(cashback.last().as_deref(), Some("R$ 340.5"));
        assert_eq!(partners.last().as_deref(), Some("4"));
        assert_eq!(revenue.last().as_deref(), Some("R$ 9000"));
    }

    #[tokio::test]
    async fn test_missing_slot_is_skipped() {
        let members = RecordingSlot::new();
        let revenue = RecordingSlot::new();
        let view = ViewBinding::new()
            .bind(SlotId::KpiMembers, Arc::new(members.clone()))
            .bind(SlotId::KpiRevenue, Arc::new(revenue.clone()));

        let port = kpi_port_returning(KpiSnapshot::new(12.0, 340.5, 4.0, 9000.0));
        let loader = DashboardLoader::new(port, view);

        let snapshot = loader.load_indicators().await.unwrap();

        assert_eq!(snapshot.partners, 4.0);
        assert_eq!(members.last().as_deref(), Some("12"));
        assert_eq!(revenue.last().as_deref(), Some("R$ 9000"));
    }

    #[tokio::test]
    async fn test_failure_leaves_slots_untouched() {
        let members = RecordingSlot::new();
        let view = ViewBinding::new().bind(SlotId::KpiMembers, Arc::new(members.clone()));

        let mut port = MockKpiPort::new();
        port.expect_fetch_kpis()
            .times(1)
            .returning(|| Err(ApiError::network("connection refused")));
        let loader = DashboardLoader::new(Arc::new(port), view);

        assert_err!(loader.load_indicators().await);
        assert!(members.writes.lock().is_empty());
    }
}
