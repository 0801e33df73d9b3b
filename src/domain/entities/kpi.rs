//! Key performance indicator snapshot.

use serde::{Deserialize, Serialize};

use super::slot::SlotId;

/// Literal marker prepended to currency fields.
pub const CURRENCY_PREFIX: &str = "R$ ";

/// Magnitudes at or above this print in exponent form.
const EXPONENT_UPPER: f64 = 1e21;
/// Nonzero magnitudes below this print in exponent form.
const EXPONENT_LOWER: f64 = 1e-6;

/// Indicator snapshot returned by `GET /api/kpis`.
///
/// Counts are plain JSON numbers on the wire; aggregated backends may send
/// `12.0` for a count, so every field is kept as `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    /// Member count.
    pub members: f64,
    /// Cashback paid out.
    pub cashback: f64,
    /// Partner count.
    pub partners: f64,
    /// Revenue.
    pub revenue: f64,
}

impl KpiSnapshot {
    /// Creates a snapshot.
    #[must_use]
    pub const fn new(members: f64, cashback: f64, partners: f64, revenue: f64) -> Self {
        Self {
            members,
            cashback,
            partners,
            revenue,
        }
    }

    /// Returns each field paired with the slot it is displayed in and its display text.
    #[must_use]
    pub fn display_entries(&self) -> [(SlotId, String); 4] {
        [
            (SlotId::KpiMembers, format_number(self.members)),
            (SlotId::KpiCashback, format_currency(self.cashback)),
            (SlotId::KpiPartners, format_number(self.partners)),
            (SlotId::KpiRevenue, format_currency(self.revenue)),
        ]
    }
}

/// Formats an amount with the currency marker, keeping the shortest numeric form.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    format!("{CURRENCY_PREFIX}{}", format_number(amount))
}

/// Renders a number the way a browser stringifies it.
///
/// Integral values carry no fraction, `-0` prints as `0`, and magnitudes of
/// `1e21` and above or below `1e-6` switch to exponent form (`1e+21`, `1e-7`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        return value.to_string();
    }

    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{"members":12,"cashback":340.5,"partners":4,"revenue":9000}"#;
        let snapshot: KpiSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot, KpiSnapshot::new(12.0, 340.5, 4.0, 9000.0));
    }

    #[test]
    fn test_float_counts_are_accepted() {
        let json = r#"{"members":12.0,"cashback":340.5,"partners":4.0,"revenue":9000.0}"#;
        let snapshot: KpiSnapshot = serde_json::from_str(json).unwrap();
        let entries = snapshot.display_entries();

        assert_eq!(entries[0].1, "12");
        assert_eq!(entries[2].1, "4");
    }

    #[test]
    fn test_display_entries() {
        let snapshot = KpiSnapshot::new(12.0, 340.5, 4.0, 9000.0);
        let entries = snapshot.display_entries();

        assert_eq!(entries[0], (SlotId::KpiMembers, "12".to_string()));
        assert_eq!(entries[1], (SlotId::KpiCashback, "R$ 340.5".to_string()));
        assert_eq!(entries[2], (SlotId::KpiPartners, "4".to_string()));
        assert_eq!(entries[3], (SlotId::KpiRevenue, "R$ 9000".to_string()));
    }

    #[test_case(9000.0, "9000" ; "integral")]
    #[test_case(0.25, "0.25" ; "fraction")]
    #[test_case(-0.0, "0" ; "negative_zero")]
    #[test_case(-12.5, "-12.5" ; "negative")]
    #[test_case(1e21, "1e+21" ; "upper_threshold")]
    #[test_case(1.5e22, "1.5e+22" ; "above_upper_threshold")]
    #[test_case(999_999_999_999_999_900_000.0, "999999999999999900000" ; "below_upper_threshold")]
    #[test_case(-1e21, "-1e+21" ; "negative_upper_threshold")]
    #[test_case(1e-6, "0.000001" ; "lower_threshold")]
    #[test_case(1e-7, "1e-7" ; "below_lower_threshold")]
    #[test_case(2.5e-8, "2.5e-8" ; "small_fraction")]
    #[test_case(f64::NAN, "NaN" ; "nan")]
    #[test_case(f64::INFINITY, "Infinity" ; "infinity")]
    #[test_case(f64::NEG_INFINITY, "-Infinity" ; "negative_infinity")]
    fn test_format_number(value: f64, expected: &str) {
        assert_eq!(format_number(value), expected);
    }
}
