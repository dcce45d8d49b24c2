//! Scoped wiki working copy.

use std::path::{Path, PathBuf};

use crate::error::{io_err, WikiError};

/// Owns the wiki clone directory for one publish run and deletes it on drop.
#[derive(Debug)]
pub struct WorkDir {
    path: PathBuf,
}

impl WorkDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        WorkDir { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove a leftover copy from an earlier run.
    pub fn clear(&self) -> Result<(), WikiError> {
        if self.path.exists() {
            tracing::debug!("removing stale working copy {}", self.path.display());
            std::fs::remove_dir_all(&self.path).map_err(|e| io_err(&self.path, e))?;
        }
        Ok(())
    }
}

impl Drop for WorkDir {
    fn drop(&mut self) {
        if !self.path.exists() {
            return;
        }
        match std::fs::remove_dir_all(&self.path) {
            Ok(()) => tracing::debug!("removed working copy {}", self.path.display()),
            Err(e) => tracing::warn!(
                "failed to remove working copy {}: {e}",
                self.path.display()
            ),
        }
    }
}
