//! Directory-backed secret store.
//!
//! The store directory is the git clone itself. Artifacts are replaced
//! atomically (temp file in the same directory, then rename) so a crash never
//! leaves a half-written blob behind.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::Store;
use crate::core::constants;
use crate::core::domain::{Fingerprint, SecretName};
use crate::error::{Result, StoreError};

/// Store rooted at a directory.
#[derive(Debug, Clone)]
pub struct Filesystem {
    root: PathBuf,
}

impl Filesystem {
    /// Open a store at the given directory. The directory is not created.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the artifacts.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the ciphertext artifact for a secret.
    pub fn ciphertext_path(&self, name: &SecretName) -> PathBuf {
        self.root.join(name.ciphertext_file())
    }

    /// Path of the fingerprint artifact for a secret.
    pub fn fingerprint_path(&self, name: &SecretName) -> PathBuf {
        self.root.join(name.fingerprint_file())
    }

    fn write_atomic(&self, path: &Path, contents: &[u8]) -> Result<()> {
        let write_err = |source: io::Error| StoreError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut tmp = NamedTempFile::new_in(&self.root).map_err(write_err)?;
        tmp.write_all(contents).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(
                tmp.path(),
                fs::Permissions::from_mode(constants::ARTIFACT_MODE),
            )
            .map_err(write_err)?;
        }

        tmp.persist(path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}

/// Remove a file, reporting whether it existed.
fn remove_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(StoreError::Remove {
            path: path.to_path_buf(),
            source,
        }
        .into()),
    }
}

impl Store for Filesystem {
    fn put(
        &self,
        name: &SecretName,
        blob: &[u8],
        fingerprint: &Fingerprint,
    ) -> Result<Vec<PathBuf>> {
        let enc = self.ciphertext_path(name);
        let md5 = self.fingerprint_path(name);

        // Old fingerprint goes first: if the ciphertext write fails the entry
        // reads as new and the next update rewrites it.
        remove_if_exists(&md5)?;

        debug!(path = %enc.display(), "writing ciphertext");
        self.write_atomic(&enc, blob)?;

        debug!(path = %md5.display(), "writing fingerprint");
        self.write_atomic(&md5, fingerprint.as_bytes())?;

        Ok(vec![enc, md5])
    }

    fn fingerprint(&self, name: &SecretName) -> Result<Option<Fingerprint>> {
        let md5 = self.fingerprint_path(name);

        if !self.contains(name) {
            if md5.exists() {
                warn!(name = %name, "fingerprint without ciphertext, treating as new");
            }
            return Ok(None);
        }

        match fs::read(&md5) {
            Ok(bytes) => Ok(Some(Fingerprint::new(String::from_utf8_lossy(&bytes)))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read { path: md5, source }.into()),
        }
    }

    fn ciphertexts(&self) -> Result<Vec<(SecretName, Vec<u8>)>> {
        let read_err = |path: &Path, source: io::Error| StoreError::Read {
            path: path.to_path_buf(),
            source,
        };

        let entries = fs::read_dir(&self.root).map_err(|e| read_err(&self.root, e))?;

        let mut found = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| read_err(&self.root, e))?;
            let path = entry.path();
            let Some(name) = entry
                .file_name()
                .to_str()
                .and_then(SecretName::from_ciphertext_file)
            else {
                continue;
            };
            if !path.is_file() {
                continue;
            }

            let blob = fs::read(&path).map_err(|e| read_err(&path, e))?;
            found.push((name, blob));
        }

        found.sort_by(|a, b| a.0.cmp(&b.0));
        debug!(count = found.len(), "listed ciphertexts");
        Ok(found)
    }

    fn remove(&self, name: &SecretName) -> Result<Vec<PathBuf>> {
        let mut removed = Vec::new();

        for path in [self.ciphertext_path(name), self.fingerprint_path(name)] {
            if remove_if_exists(&path)? {
                removed.push(path);
            }
        }

        if removed.is_empty() {
            return Err(StoreError::NotFound(name.to_string()).into());
        }

        debug!(name = %name, artifacts = removed.len(), "removed from store");
        Ok(removed)
    }

    fn contains(&self, name: &SecretName) -> bool {
        self.ciphertext_path(name).is_file()
    }

    fn has_artifacts(&self, name: &SecretName) -> bool {
        self.contains(name) || self.fingerprint_path(name).is_file()
    }
}
