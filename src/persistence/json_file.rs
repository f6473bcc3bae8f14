//! Atomic JSON file reads and writes

use std::path::Path;

use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;
use tracing::debug;

/// Read and decode a JSON file, returning `None` when it does not exist
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Option<T>> {
    let contents = match fs::read(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("{} does not exist yet", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to read {}", path.display())),
    };

    let value = serde_json::from_slice(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(Some(value))
}

/// Encode a value and replace the file through a temporary sibling
pub async fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let contents = serde_json::to_vec_pretty(value).context("Failed to encode JSON")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, &contents)
        .await
        .with_context(|| format!("Failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .await
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
