//! Preference store port definition.

use crate::domain::errors::PreferenceError;

/// Key under which the active theme is persisted.
pub const THEME_KEY: &str = "theme";

/// Persistent string key-value store scoped to the local profile.
pub trait PreferenceStore: Send + Sync {
    /// Reads a value.
    ///
    /// # Errors
    /// Returns error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Writes a value, replacing any previous one.
    ///
    /// # Errors
    /// Returns error if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}
