//! Key-value persistence module
//! 
//! This module saves the clock snapshot and user preferences as small JSON
//! files so a match survives a restart.

pub mod json_file;
pub mod preferences;
pub mod snapshot;

// Re-export main types
pub use preferences::PreferencesStore;
pub use snapshot::{PersistedSnapshot, SnapshotStore};
