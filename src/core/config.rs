//! Configuration file management.
//!
//! Each project has a TOML file in the ghsec home directory
//! (`~/.ghsec/.config.<project>.toml`) naming the clone directory, the branch
//! to push to and the Base64 encryption key. The file is local to the machine
//! and never committed; it is written with mode 0600.
//!
//! Loading validates everything the engine relies on and produces a
//! `Project`, the only form in which configuration reaches the core.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::cipher::EncryptionKey;
use crate::core::{constants, files};
use crate::error::{ConfigError, Result};

/// The ghsec home directory (holds project configs and clones).
#[derive(Debug, Clone)]
pub struct Home {
    root: PathBuf,
}

impl Home {
    /// Use an explicit directory as the ghsec home.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the home directory: the explicit path if given, otherwise
    /// `~/.ghsec`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` if the user's home cannot be found.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        if let Some(root) = explicit {
            return Ok(Self::new(root));
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(Self::new(home.join(constants::HOME_DIR)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a project's config file.
    pub fn config_path(&self, project: &str) -> PathBuf {
        self.root.join(format!(
            "{}{}{}",
            constants::CONFIG_PREFIX,
            project,
            constants::CONFIG_SUFFIX
        ))
    }

    /// Directory of a cloned secrets repository.
    pub fn repo_dir(&self, repo: &str) -> PathBuf {
        self.root.join(repo)
    }

    /// Create the home directory (mode 0700) if missing.
    pub fn ensure(&self) -> Result<()> {
        files::create_dir_with_mode(&self.root, constants::HOME_MODE)?;
        Ok(())
    }
}

/// Project configuration stored in `.config.<project>.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Version of ghsec that wrote the file
    pub version: String,
    /// Clone directory name inside the ghsec home
    pub repo: String,
    /// Remote URL the clone was made from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
    /// Branch pushed to after an update or removal
    #[serde(default = "default_branch")]
    pub branch: String,
    /// Standard Base64 encoding of the 32-byte key
    pub key: String,
}

fn default_branch() -> String {
    constants::DEFAULT_BRANCH.to_string()
}

impl Config {
    /// Create a configuration for a freshly cloned repository.
    pub fn new(repo: &str, remote: Option<String>, branch: &str, key: &EncryptionKey) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            repo: repo.to_string(),
            remote,
            branch: branch.to_string(),
            key: key.to_base64(),
        }
    }

    /// Check if a project has a config file.
    pub fn exists(home: &Home, project: &str) -> bool {
        home.config_path(project).is_file()
    }

    /// Load and validate a project's configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the file doesn't exist,
    /// `ConfigError::Parse` if the TOML is malformed, or a validation error.
    pub fn load(home: &Home, project: &str) -> Result<Self> {
        let config = Self::load_unchecked(home, project)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a project's configuration without validating its contents.
    ///
    /// Only used to clean up a project whose config may be broken.
    pub fn load_unchecked(home: &Home, project: &str) -> Result<Self> {
        validate_project_name(project)?;

        let path = home.config_path(project);
        debug!(path = %path.display(), "loading config");

        if !path.is_file() {
            return Err(ConfigError::NotInitialized(project.to_string()).into());
        }
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        debug!(repo = %config.repo, branch = %config.branch, "config loaded");
        Ok(config)
    }

    /// Save the configuration (mode 0600).
    pub fn save(&self, home: &Home, project: &str) -> Result<()> {
        validate_project_name(project)?;
        debug!(project, "saving config");

        home.ensure()?;
        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        files::write_with_mode(
            &home.config_path(project),
            contents.as_bytes(),
            constants::CONFIG_MODE,
        )?;
        Ok(())
    }

    /// Validate the configuration contents.
    ///
    /// Checks:
    /// - `repo` is a bare directory name
    /// - `branch` is not empty
    /// - `key` decodes to exactly 32 bytes
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField`, `ConfigError::InvalidValue` or
    /// `ConfigError::InvalidKey`.
    pub fn validate(&self) -> Result<()> {
        debug!("validating config");

        if self.repo.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "repo" }.into());
        }
        if self.repo.contains('/') || self.repo.contains('\\') || self.repo.starts_with('.') {
            return Err(ConfigError::InvalidValue {
                field: "repo",
                reason: format!("must be a directory name: {}", self.repo),
            }
            .into());
        }
        if self.branch.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "branch" }.into());
        }

        EncryptionKey::from_base64(&self.key)?;
        Ok(())
    }

    /// Turn the loaded configuration into the value the engine works with.
    pub fn project(&self, home: &Home, name: &str) -> Result<Project> {
        Ok(Project {
            name: name.to_string(),
            key: EncryptionKey::from_base64(&self.key)?,
            store: home.repo_dir(&self.repo),
            branch: self.branch.clone(),
        })
    }
}

/// A validated project: everything the sync engine needs.
#[derive(Debug, Clone)]
pub struct Project {
    /// Project name (as used on the command line)
    pub name: String,
    /// Validated encryption key
    pub key: EncryptionKey,
    /// Clone directory that doubles as the secret store
    pub store: PathBuf,
    /// Branch to push to
    pub branch: String,
}

impl Project {
    /// Load and validate a project from its config file.
    pub fn load(home: &Home, name: &str) -> Result<Self> {
        Config::load(home, name)?.project(home, name)
    }
}

/// Validate a project name used to build the config file name.
pub fn validate_project_name(project: &str) -> Result<()> {
    if project.is_empty() {
        return Err(ConfigError::MissingField { field: "project" }.into());
    }
    if project.contains('/') || project.contains('\\') || project.starts_with('.') {
        return Err(ConfigError::InvalidValue {
            field: "project",
            reason: format!("must be a plain name: {}", project),
        }
        .into());
    }
    Ok(())
}
