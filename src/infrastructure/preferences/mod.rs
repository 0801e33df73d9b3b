//! Preference store adapters.

mod file_store;
mod memory_store;

pub use file_store::{FilePreferenceStore, PREFERENCES_FILE_NAME};
pub use memory_store::MemoryPreferenceStore;
