//! Staged output writing
//!
//! The encoder writes into a temporary file next to the destination, which is
//! renamed over the destination only once encoding succeeded. Dropping an
//! uncommitted [`StagedOutput`] removes the temporary file.

use std::path::{Path, PathBuf};

use tempfile::TempPath;
use tracing::debug;

use crate::error::{TrimError, TrimResult};

/// Temporary file awaiting an atomic rename onto its target
#[derive(Debug)]
pub struct StagedOutput {
    target: PathBuf,
    temp: TempPath,
}

impl StagedOutput {
    /// Reserve a temporary file in the target's directory
    pub fn create(target: &Path) -> TrimResult<Self> {
        let destination_unavailable = |reason: String| TrimError::DestinationUnavailable {
            path: target.to_path_buf(),
            reason,
        };

        if target.as_os_str().is_empty() {
            return Err(destination_unavailable("empty output path".to_string()));
        }
        if target.is_dir() {
            return Err(destination_unavailable("is a directory".to_string()));
        }

        let parent = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !parent.is_dir() {
            return Err(destination_unavailable(format!(
                "directory {} does not exist",
                parent.display()
            )));
        }

        // Keep the extension so the encoder picks the same container
        let suffix = target
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        let temp = tempfile::Builder::new()
            .prefix(".trim_video-")
            .suffix(&suffix)
            .tempfile_in(parent)
            .map_err(|e| destination_unavailable(e.to_string()))?
            .into_temp_path();

        debug!("Staging output for {} in {}", target.display(), temp.display());
        Ok(Self {
            target: target.to_path_buf(),
            temp,
        })
    }

    /// Path the encoder should write to
    pub fn path(&self) -> &Path {
        &self.temp
    }

    /// Final destination
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Move the staged file onto the target, replacing any existing file
    pub fn commit(self) -> TrimResult<PathBuf> {
        let target = self.target;
        self.temp
            .persist(&target)
            .map_err(|e| TrimError::DestinationUnavailable {
                path: target.clone(),
                reason: e.error.to_string(),
            })?;
        Ok(target)
    }
}
