//! Update workflow.
//!
//! Encrypts the secret files that changed since the last sync and publishes
//! their artifacts. The loop is fail-fast: the first read, encrypt or write
//! error aborts the run before anything is committed.

use std::path::Path;

use tracing::{debug, info};
use zeroize::Zeroizing;

use super::{commit_message, discover, Vault};
use crate::core::cipher;
use crate::core::detect;
use crate::core::digest;
use crate::core::domain::{Change, SecretName, UpdateReport};
use crate::core::store::Store;
use crate::error::{Error, Result};

impl Vault {
    /// Classify every secret file in `workdir` without writing anything.
    ///
    /// Does not refresh the clone; the result reflects the store as it is
    /// on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or a secret file cannot be read.
    pub fn plan(&self, workdir: &Path) -> Result<UpdateReport> {
        let mut report = UpdateReport::default();

        for (name, path) in discover(workdir)? {
            let (change, _) = self.inspect(name, &path)?;
            report.changes.push(change);
        }

        Ok(report)
    }

    /// Encrypt new and modified secret files and publish the artifacts.
    ///
    /// Unchanged files are skipped, so a second run with no edits writes
    /// nothing and commits nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the refresh fails, a file cannot be read, a
    /// secret cannot be encrypted or stored, or publishing fails.
    pub fn update(&self, workdir: &Path) -> Result<UpdateReport> {
        self.vcs.refresh(self.store.root())?;

        let mut report = UpdateReport::default();

        for (name, path) in discover(workdir)? {
            let (change, plaintext) = self.inspect(name, &path)?;

            if change.status.needs_encryption() {
                let blob = cipher::encrypt(&self.project.key, &plaintext).map_err(|source| {
                    Error::Encrypt {
                        name: change.name.to_string(),
                        source,
                    }
                })?;
                let written = self.store.put(&change.name, &blob, &change.fingerprint)?;
                info!(name = %change.name, status = %change.status, "encrypted");
                report.artifacts.extend(written);
            } else {
                debug!(name = %change.name, "unchanged, skipping");
            }

            report.changes.push(change);
        }

        if report.artifacts.is_empty() {
            info!("no changes to publish");
            return Ok(report);
        }

        let changed: Vec<&SecretName> = report.changed().into_iter().map(|c| &c.name).collect();
        let message = commit_message("Update", &changed);
        self.vcs.publish(
            self.store.root(),
            &report.artifacts,
            &self.project.branch,
            &message,
        )?;
        report.published = true;

        Ok(report)
    }

    /// Read, fingerprint and classify one secret file.
    fn inspect(&self, name: SecretName, path: &Path) -> Result<(Change, Zeroizing<Vec<u8>>)> {
        let plaintext = Zeroizing::new(std::fs::read(path).map_err(|source| {
            Error::ReadPlaintext {
                path: path.to_path_buf(),
                source,
            }
        })?);

        let fingerprint = digest::fingerprint(&plaintext);
        let status = detect::classify(&name, &fingerprint, &self.store)?;

        Ok((
            Change {
                name,
                status,
                fingerprint,
            },
            plaintext,
        ))
    }
}
