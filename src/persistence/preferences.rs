//! Preferences file

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::state::Preferences;

use super::json_file::{read_json, write_json};

#[derive(Debug, Clone)]
pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load stored preferences, falling back to defaults when missing or unreadable
    ///
    /// Out-of-range time settings are reset individually; the theme is kept.
    pub async fn load(&self) -> Preferences {
        match read_json::<Preferences>(&self.path).await {
            Ok(Some(mut prefs)) => {
                if prefs.sanitize() {
                    warn!("Stored time settings out of range, reset to defaults: {:?}", prefs);
                } else {
                    debug!("Loaded preferences: {:?}", prefs);
                }
                prefs
            }
            Ok(None) => Preferences::default(),
            Err(e) => {
                warn!("Failed to load preferences: {:#}, using defaults", e);
                Preferences::default()
            }
        }
    }

    pub async fn save(&self, prefs: &Preferences) -> anyhow::Result<()> {
        write_json(&self.path, prefs).await
    }
}
