//! Project lifecycle.
//!
//! Init clones the secrets repository into the ghsec home and writes the
//! project config; purge removes both again.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::Vault;
use crate::core::cipher::EncryptionKey;
use crate::core::config::{Config, Home};
use crate::core::constants;
use crate::core::vcs::{self, Vcs};
use crate::error::{ConfigError, Result};

/// Parameters for initializing a project.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Remote URL of the secrets repository
    pub url: String,
    /// Committer name for commits made from this machine
    pub committer: String,
    /// Existing Base64 key to join a team; a new key is generated if `None`
    pub key: Option<String>,
    /// Branch to push to
    pub branch: String,
}

impl InitOptions {
    pub fn new(url: impl Into<String>, committer: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            committer: committer.into(),
            key: None,
            branch: constants::DEFAULT_BRANCH.to_string(),
        }
    }
}

impl Vault {
    /// Initialize a new project.
    ///
    /// Clones the repository into `<home>/<repo>`, configures the committer
    /// and writes `<home>/.config.<name>.toml` with the key.
    ///
    /// # Arguments
    ///
    /// * `home` - ghsec home directory
    /// * `name` - Project name used by every other command
    /// * `options` - Remote, committer, key and branch
    /// * `vcs` - Backend used for the clone and all later operations
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::AlreadyInitialized` if the project has a config,
    /// `ConfigError::InvalidKey` if a supplied key is not 32 bytes of Base64,
    /// `VcsError::InvalidUrl` if no repository name can be derived, or the
    /// backend's error if cloning fails.
    pub fn init(home: &Home, name: &str, options: InitOptions, vcs: Box<dyn Vcs>) -> Result<Self> {
        crate::core::config::validate_project_name(name)?;
        if Config::exists(home, name) {
            return Err(ConfigError::AlreadyInitialized(name.to_string()).into());
        }

        let key = match &options.key {
            Some(encoded) => EncryptionKey::from_base64(encoded)?,
            None => EncryptionKey::generate(),
        };
        let repo = vcs::repo_name(&options.url)?;

        home.ensure()?;
        let dest = home.repo_dir(&repo);
        if dest.exists() {
            warn!(path = %dest.display(), "removing stale clone");
            std::fs::remove_dir_all(&dest)?;
        }

        info!(url = %options.url, repo = %repo, "cloning secrets repository");
        vcs.clone_repo(&options.url, &dest)?;
        vcs.configure_committer(&dest, &options.committer, constants::COMMIT_EMAIL)?;

        let config = Config::new(&repo, Some(options.url.clone()), &options.branch, &key);
        config.save(home, name)?;
        debug!(project = name, "config written");

        let project = config.project(home, name)?;
        Ok(Self::new(project, vcs))
    }

    /// Remove a project's clone and config.
    ///
    /// Works on configs that no longer validate (for example a mangled key).
    ///
    /// # Returns
    ///
    /// The paths that were deleted.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the project has no config,
    /// or an I/O error if deletion fails.
    pub fn purge(home: &Home, name: &str) -> Result<Vec<PathBuf>> {
        let config = Config::load_unchecked(home, name)?;
        let mut removed = Vec::new();

        if is_bare_name(&config.repo) {
            let clone = home.repo_dir(&config.repo);
            if remove_tree(&clone)? {
                removed.push(clone);
            }
        } else {
            warn!(repo = %config.repo, "config names no usable clone directory, leaving it");
        }

        let config_path = home.config_path(name);
        std::fs::remove_file(&config_path)?;
        removed.push(config_path);

        info!(project = name, "purged");
        Ok(removed)
    }
}

fn is_bare_name(repo: &str) -> bool {
    !repo.is_empty() && !repo.contains(['/', '\\']) && repo != "." && repo != ".."
}

fn remove_tree(path: &Path) -> Result<bool> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
