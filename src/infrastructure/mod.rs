//! Infrastructure layer with external service adapters.

/// Analytics backend HTTP client.
pub mod api;
/// Wall clock.
pub mod clock;
/// Application configuration.
pub mod config;
/// Preference store adapters.
pub mod preferences;
/// Realtime WebSocket channel.
pub mod realtime;

pub use api::AnalyticsClient;
pub use clock::SystemClock;
pub use config::{AppConfig, CliArgs, Command, LogLevel, StorageManager, ThemeAction};
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore};
pub use realtime::{RealtimeClient, RealtimeClientConfig};
