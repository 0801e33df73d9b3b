//! Domain layer with core entities and port definitions.

/// Realtime channel status.
pub mod connection;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use connection::ConnectionStatus;
pub use entities::{KpiSnapshot, RealtimeMessage, SlotId, Theme};
pub use errors::{ApiError, ChannelError, PreferenceError};
pub use ports::{
    ClockPort, InsightsPort, KpiPort, PreferenceStore, RealtimeEvent, RealtimePort,
    RealtimeRenderer, SlotSink, ThemeSurface,
};
