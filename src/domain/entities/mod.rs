//! Domain entities.

mod kpi;
mod realtime;
mod slot;
mod theme;

pub use kpi::{CURRENCY_PREFIX, KpiSnapshot, format_currency, format_number};
pub use realtime::RealtimeMessage;
pub use slot::SlotId;
pub use theme::{NIGHT_END_HOUR, NIGHT_START_HOUR, Theme};
