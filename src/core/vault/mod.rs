//! The primary interface for ghsec operations.
//!
//! Vault owns a validated project, its store and the version control backend,
//! and provides the update, extract and remove workflows plus the project
//! lifecycle (init, purge).

mod extract;
mod lifecycle;
mod remove;
mod update;

pub use lifecycle::InitOptions;

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::debug;

use crate::core::config::{Home, Project};
use crate::core::domain::SecretName;
use crate::core::store::Filesystem;
use crate::core::vcs::{self, Vcs};
use crate::error::Result;

/// The primary interface for ghsec operations.
///
/// Every workflow takes the working directory explicitly; the vault itself
/// holds no reference to the process's current directory.
pub struct Vault {
    pub(super) project: Project,
    pub(super) store: Filesystem,
    pub(super) vcs: Box<dyn Vcs>,
}

impl std::fmt::Debug for Vault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vault")
            .field("project", &self.project)
            .field("store", &self.store.root())
            .field("vcs", &self.vcs.name())
            .finish()
    }
}

impl Vault {
    /// Create a vault from a validated project and a backend.
    pub fn new(project: Project, vcs: Box<dyn Vcs>) -> Self {
        let store = Filesystem::new(&project.store);
        Self {
            project,
            store,
            vcs,
        }
    }

    /// Open an initialized project with the default backend.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the project has no config,
    /// a validation error if the config is invalid, or
    /// `VcsError::NotInstalled` if git is required but missing.
    pub fn open(home: &Home, name: &str) -> Result<Self> {
        let project = Project::load(home, name)?;
        let vcs = vcs::default_backend()?;
        debug!(project = name, backend = vcs.name(), "opened vault");
        Ok(Self::new(project, vcs))
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// The store backing this project (the clone directory).
    pub fn store(&self) -> &Filesystem {
        &self.store
    }

    /// Name of the version control backend in use.
    pub fn backend(&self) -> &'static str {
        self.vcs.name()
    }
}

/// Enumerate secret files in a working directory.
///
/// Regular files whose name is a valid `SecretName`, sorted by name.
/// Directories, symlinks to directories and artifacts (`.enc`, `.md5`) are
/// skipped.
pub(super) fn discover(workdir: &Path) -> Result<Vec<(SecretName, PathBuf)>> {
    let mut found = Vec::new();

    for entry in std::fs::read_dir(workdir)? {
        let entry = entry?;
        let path = entry.path();
        let Some(name) = entry
            .file_name()
            .to_str()
            .and_then(|s| SecretName::parse(s).ok())
        else {
            continue;
        };
        if !path.is_file() {
            continue;
        }
        found.push((name, path));
    }

    found.sort_by(|a, b| a.0.cmp(&b.0));
    debug!(dir = %workdir.display(), count = found.len(), "discovered secret files");
    Ok(found)
}

/// Commit message naming the affected secrets, stamped with UTC time.
pub(super) fn commit_message(verb: &str, names: &[&SecretName]) -> String {
    let list = names
        .iter()
        .map(|n| n.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{} {} ({})",
        verb,
        list,
        Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
    )
}
