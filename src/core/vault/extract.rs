//! Extract workflow.
//!
//! Decrypts every store entry back into the working directory. All entries
//! are decrypted before the first plaintext is written, so a corrupt or
//! foreign entry leaves the working directory as it was.

use std::path::Path;

use tracing::{debug, info};

use super::Vault;
use crate::core::domain::ExtractReport;
use crate::core::store::Store;
use crate::core::{cipher, constants, files};
use crate::error::{Error, Result};

impl Vault {
    /// Decrypt all secrets in the store into `workdir`.
    ///
    /// New files are created with mode 0600; existing files are overwritten
    /// in place and keep their permissions.
    ///
    /// # Errors
    ///
    /// Returns `Error::Decrypt` naming the first entry that fails
    /// authentication or is malformed, or an I/O error if a file cannot be
    /// written.
    pub fn extract(&self, workdir: &Path) -> Result<ExtractReport> {
        self.vcs.refresh(self.store.root())?;

        let entries = self.store.ciphertexts()?;
        let mut plaintexts = Vec::with_capacity(entries.len());

        for (name, blob) in entries {
            let plaintext = cipher::decrypt(&self.project.key, &blob).map_err(|source| {
                Error::Decrypt {
                    name: name.to_string(),
                    source,
                }
            })?;
            debug!(name = %name, "decrypted");
            plaintexts.push((name, plaintext));
        }

        let mut report = ExtractReport::default();
        for (name, plaintext) in plaintexts {
            let path = workdir.join(name.as_str());
            files::write_with_mode(&path, &plaintext, constants::PLAINTEXT_MODE).map_err(
                |source| Error::WritePlaintext {
                    path: path.clone(),
                    source,
                },
            )?;
            report.written.push(path);
        }

        info!(count = report.written.len(), "extracted secrets");
        Ok(report)
    }
}
