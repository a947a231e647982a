//! Remove workflow.

use std::io;
use std::path::Path;

use tracing::{debug, info};

use super::{commit_message, Vault};
use crate::core::domain::{RemoveReport, SecretName};
use crate::core::store::Store;
use crate::error::{Error, Result, StoreError};

impl Vault {
    /// Remove secrets from the store and publish the deletion.
    ///
    /// Every name is checked before anything is deleted, so an unknown name
    /// aborts the whole call. A name with only one artifact left still
    /// counts as known and is cleaned up. Local plaintext copies in `workdir` are deleted
    /// too unless `keep_local` is set.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if a name has no store entry, or an
    /// error if deleting or publishing fails.
    pub fn remove(
        &self,
        workdir: &Path,
        names: &[SecretName],
        keep_local: bool,
    ) -> Result<RemoveReport> {
        self.vcs.refresh(self.store.root())?;

        if let Some(missing) = names.iter().find(|n| !self.store.has_artifacts(n)) {
            return Err(StoreError::NotFound(missing.to_string()).into());
        }

        let mut report = RemoveReport::default();
        for name in names {
            if report.removed.contains(name) {
                continue;
            }
            report.artifacts.extend(self.store.remove(name)?);

            if !keep_local {
                let local = workdir.join(name.as_str());
                match std::fs::remove_file(&local) {
                    Ok(()) => {
                        debug!(path = %local.display(), "deleted local copy");
                        report.local.push(local);
                    }
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(source) => {
                        return Err(Error::WritePlaintext {
                            path: local,
                            source,
                        })
                    }
                }
            }

            info!(name = %name, "removed");
            report.removed.push(name.clone());
        }

        let removed: Vec<&SecretName> = report.removed.iter().collect();
        let message = commit_message("Remove", &removed);
        self.vcs.publish_removal(
            self.store.root(),
            &report.artifacts,
            &self.project.branch,
            &message,
        )?;

        Ok(report)
    }
}
