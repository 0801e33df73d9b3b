//! Named display slots.

use std::fmt;

/// Output slot in a view. A view may leave any slot unbound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotId {
    /// Member count.
    KpiMembers,
    /// Cashback amount.
    KpiCashback,
    /// Partner count.
    KpiPartners,
    /// Revenue amount.
    KpiRevenue,
    /// HTML answer from the insights endpoint.
    AiResponse,
}

impl SlotId {
    /// Returns the element name the slot is known by.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KpiMembers => "kpi-members",
            Self::KpiCashback => "kpi-cashback",
            Self::KpiPartners => "kpi-partners",
            Self::KpiRevenue => "kpi-revenue",
            Self::AiResponse => "ai-response",
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
