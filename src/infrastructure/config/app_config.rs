//! Application configuration.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::args::CliArgs;
use crate::infrastructure::api::DEFAULT_BASE_URL;
use crate::infrastructure::realtime::{DEFAULT_REALTIME_URL, MAX_RECONNECT_ATTEMPTS};

pub(crate) const APP_NAME: &str = "analytica";
pub(crate) const APP_QUALIFIER: &str = "a";
pub(crate) const APP_ORGANIZATION: &str = "analystic";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and overridden by CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Backend base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Realtime channel URL.
    #[serde(default = "default_realtime_url")]
    pub realtime_url: String,

    /// Session token issued by the backend login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Realtime channel configuration.
    #[serde(default)]
    pub realtime: RealtimeConfig,
}

/// Realtime channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Reconnect with backoff after the channel fails.
    #[serde(default)]
    pub auto_reconnect: bool,

    /// Reconnect attempts before giving up.
    #[serde(default = "default_max_reconnect_attempts")]
    pub max_reconnect_attempts: u32,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            auto_reconnect: false,
            max_reconnect_attempts: MAX_RECONNECT_ATTEMPTS,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_realtime_url() -> String {
    DEFAULT_REALTIME_URL.to_string()
}

const fn default_request_timeout() -> u64 {
    30
}

const fn default_max_reconnect_attempts() -> u32 {
    MAX_RECONNECT_ATTEMPTS
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(base_url) = &args.base_url {
            self.base_url.clone_from(base_url);
        }
        if let Some(realtime_url) = &args.realtime_url {
            self.realtime_url.clone_from(realtime_url);
        }
        if let Some(token) = &args.access_token {
            self.access_token = Some(token.clone());
        }
        if args.reconnect {
            self.realtime.auto_reconnect = true;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default data directory.
    #[must_use]
    pub fn default_data_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        Self::default_data_dir().map(|dir| dir.join("analytica.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }

    /// Returns the HTTP request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            base_url: default_base_url(),
            realtime_url: default_realtime_url(),
            access_token: None,
            request_timeout_secs: default_request_timeout(),
            realtime: RealtimeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            base_url = "http://localhost:8080"
            log_level = "debug"

            [realtime]
            auto_reconnect = true
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.realtime_url, DEFAULT_REALTIME_URL);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.realtime.auto_reconnect);
        assert_eq!(config.realtime.max_reconnect_attempts, MAX_RECONNECT_ATTEMPTS);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.access_token, None);
        assert!(!config.realtime.auto_reconnect);
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "analytica",
            "--base-url",
            "http://127.0.0.1:8080",
            "--access-token",
            "tok",
            "--reconnect",
            "kpis",
        ]);

        config.merge_with_args(&args);

        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.access_token.as_deref(), Some("tok"));
        assert!(config.realtime.auto_reconnect);
        assert_eq!(config.realtime_url, DEFAULT_REALTIME_URL);
    }
}
