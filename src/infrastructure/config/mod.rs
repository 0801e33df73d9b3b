//! Application configuration.

pub mod app_config;
pub mod args;
pub mod storage;

pub use app_config::{AppConfig, LogLevel, RealtimeConfig};
pub use args::{CliArgs, Command, ThemeAction};
pub use storage::{ConfigError, StorageManager};
