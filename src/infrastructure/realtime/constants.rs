use std::time::Duration;

pub const DEFAULT_REALTIME_URL: &str = "wss://analystic.a/ws";

pub const CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);

pub const RECONNECT_DELAY_BASE: Duration = Duration::from_secs(1);
pub const RECONNECT_DELAY_MAX: Duration = Duration::from_secs(60);
pub const RECONNECT_JITTER_MAX: Duration = Duration::from_millis(500);
pub const MAX_RECONNECT_ATTEMPTS: u32 = 10;
