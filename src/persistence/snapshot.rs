//! Clock snapshot file

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::state::ClockState;

use super::json_file::{read_json, write_json};

/// Clock state as written to disk, stamped with the time it was saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSnapshot {
    pub saved_at: DateTime<Utc>,
    #[serde(flatten)]
    pub clock: ClockState,
}

#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the last saved snapshot, if any
    ///
    /// The contents are not validated here; the engine rejects inconsistent
    /// state on restore.
    pub async fn load(&self) -> anyhow::Result<Option<PersistedSnapshot>> {
        let snapshot: Option<PersistedSnapshot> = read_json(&self.path).await?;
        if let Some(snapshot) = &snapshot {
            info!(
                "Loaded {} match saved at {}",
                snapshot.clock.run_state, snapshot.saved_at
            );
        }
        Ok(snapshot)
    }

    pub async fn save(&self, clock: &ClockState) -> anyhow::Result<()> {
        let snapshot = PersistedSnapshot {
            saved_at: Utc::now(),
            clock: clock.clone(),
        };
        write_json(&self.path, &snapshot).await?;
        info!("Saved clock state to {}", self.path.display());
        Ok(())
    }
}
