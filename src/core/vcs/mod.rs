//! Version control backends.
//!
//! The store directory is a git clone; publishing a change means staging the
//! touched artifacts, committing and pushing. The engine only sees the `Vcs`
//! trait, so it can run against an offline backend or a test double.
//!
//! ## Backends
//!
//! - **git**: default. Runs the `git` binary found on `PATH`.
//! - **offline**: selected with `GHSEC_NO_GIT=1`. Clones become empty
//!   directories and nothing is committed or pushed.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, VcsError};

mod git;
mod offline;

pub use git::Git;
pub use offline::Offline;

/// Environment variable selecting the offline backend.
pub const NO_GIT_ENV: &str = "GHSEC_NO_GIT";

/// Version control operations the sync engine delegates.
///
/// Every failure is fatal to the command that triggered it.
pub trait Vcs {
    /// Clone `url` into `dest` (which must not exist yet).
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()>;

    /// Set the committer identity for a clone.
    fn configure_committer(&self, repo: &Path, name: &str, email: &str) -> Result<()>;

    /// Bring the clone to the remote's latest state.
    ///
    /// Discards local edits, unpushed commits and untracked artifacts, so a
    /// secret whose publish never completed reads as new again.
    fn refresh(&self, repo: &Path) -> Result<()>;

    /// Stage `paths`, commit with `message` and push to `branch`.
    fn publish(&self, repo: &Path, paths: &[PathBuf], branch: &str, message: &str) -> Result<()>;

    /// Stage the deletion of `paths`, commit with `message` and push to `branch`.
    fn publish_removal(
        &self,
        repo: &Path,
        paths: &[PathBuf],
        branch: &str,
        message: &str,
    ) -> Result<()>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}

/// Default backend selection.
///
/// `GHSEC_NO_GIT` set (to anything) selects the offline backend; otherwise
/// git must be installed.
///
/// # Errors
///
/// Returns `VcsError::NotInstalled` if git cannot be found.
pub fn default_backend() -> Result<Box<dyn Vcs>> {
    if std::env::var_os(NO_GIT_ENV).is_some() {
        info!("Using offline backend ({}=1)", NO_GIT_ENV);
        return Ok(Box::new(Offline));
    }

    let git = Git::locate()?;
    info!("Using git backend");
    Ok(Box::new(git))
}

/// Derive the clone directory name from a repository URL.
///
/// Accepts `scheme://host/path`, scp-style `user@host:path` and local paths;
/// the name is the last path segment without a `.git` suffix.
///
/// # Errors
///
/// Returns `VcsError::InvalidUrl` if no usable name can be derived.
pub fn repo_name(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    let last = trimmed
        .rsplit(['/', ':', '\\'])
        .next()
        .unwrap_or_default();
    let name = last.strip_suffix(".git").unwrap_or(last);

    if name.is_empty() || name == "." || name == ".." || name.starts_with('.') {
        return Err(VcsError::InvalidUrl(url.to_string()).into());
    }

    Ok(name.to_string())
}
