//! Preference store error types.

use thiserror::Error;

/// Failure reading or writing a persisted preference.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum PreferenceError {
    #[error("failed to determine preference directory")]
    DirNotFound,

    #[error("preference file io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}
