//! Sync results.
//!
//! What an update found for each secret file, and what an extract wrote.

use std::path::PathBuf;

use serde::Serialize;

use super::{Fingerprint, SecretName};

/// Change state of a secret file relative to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Fingerprint matches the stored one.
    Unchanged,
    /// No fingerprint stored for this name.
    New,
    /// A fingerprint is stored but differs.
    Modified,
}

impl Status {
    /// Whether the file has to be encrypted and written to the store.
    pub fn needs_encryption(self) -> bool {
        matches!(self, Status::New | Status::Modified)
    }

    /// Short label for display.
    pub fn label(self) -> &'static str {
        match self {
            Status::Unchanged => "unchanged",
            Status::New => "new",
            Status::Modified => "modified",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification of one secret file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Change {
    pub name: SecretName,
    pub status: Status,
    pub fingerprint: Fingerprint,
}

/// Result of an update (or of a dry run, where `artifacts` stays empty).
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateReport {
    /// Every secret file found, in name order.
    pub changes: Vec<Change>,
    /// Store paths written during this run.
    pub artifacts: Vec<PathBuf>,
    /// Whether the written artifacts were handed to version control.
    pub published: bool,
}

impl UpdateReport {
    /// Files that were (or would be) encrypted.
    pub fn changed(&self) -> Vec<&Change> {
        self.changes
            .iter()
            .filter(|c| c.status.needs_encryption())
            .collect()
    }

    /// Files skipped because their fingerprint matched.
    pub fn unchanged(&self) -> Vec<&Change> {
        self.changes
            .iter()
            .filter(|c| !c.status.needs_encryption())
            .collect()
    }

    /// Whether there is nothing to encrypt.
    pub fn is_up_to_date(&self) -> bool {
        self.changed().is_empty()
    }
}

/// Result of an extract.
#[derive(Debug, Clone, Default)]
pub struct ExtractReport {
    /// Plaintext files written, in name order.
    pub written: Vec<PathBuf>,
}

/// Result of a removal.
#[derive(Debug, Clone, Default)]
pub struct RemoveReport {
    /// Secrets removed from the store.
    pub removed: Vec<SecretName>,
    /// Store artifacts deleted.
    pub artifacts: Vec<PathBuf>,
    /// Local plaintext copies deleted from the working directory.
    pub local: Vec<PathBuf>,
}
