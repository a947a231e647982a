//! Offline backend.
//!
//! For machines without git or network access, and for tests. Cloning creates
//! an empty store directory; everything else is a logged no-op, so artifacts
//! stay on disk uncommitted.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::Vcs;
use crate::error::Result;

/// Backend that never talks to a remote.
#[derive(Debug, Clone, Copy, Default)]
pub struct Offline;

impl Vcs for Offline {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        info!(url, dest = %dest.display(), "offline: creating empty store");
        std::fs::create_dir_all(dest)?;
        Ok(())
    }

    fn configure_committer(&self, _repo: &Path, name: &str, _email: &str) -> Result<()> {
        debug!(name, "offline: skipping committer setup");
        Ok(())
    }

    fn refresh(&self, repo: &Path) -> Result<()> {
        debug!(repo = %repo.display(), "offline: skipping refresh");
        Ok(())
    }

    fn publish(&self, _repo: &Path, paths: &[PathBuf], _branch: &str, message: &str) -> Result<()> {
        info!(artifacts = paths.len(), message, "offline: leaving changes uncommitted");
        Ok(())
    }

    fn publish_removal(
        &self,
        _repo: &Path,
        paths: &[PathBuf],
        _branch: &str,
        message: &str,
    ) -> Result<()> {
        info!(artifacts = paths.len(), message, "offline: leaving removal uncommitted");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "offline"
    }
}
