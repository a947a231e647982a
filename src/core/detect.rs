//! Change detection.
//!
//! Decides whether a secret file needs to be re-encrypted by comparing its
//! current fingerprint with the one recorded in the store. Unchanged files
//! are skipped, which also avoids spending a fresh nonce on them.

use tracing::debug;

use crate::core::domain::{Fingerprint, SecretName, Status};
use crate::core::store::Store;
use crate::error::Result;

/// Compare a current fingerprint with the previously stored one.
pub fn compare(previous: Option<&Fingerprint>, current: &Fingerprint) -> Status {
    match previous {
        None => Status::New,
        Some(prev) if prev == current => Status::Unchanged,
        Some(_) => Status::Modified,
    }
}

/// Classify a secret against the store's last known fingerprint.
///
/// # Errors
///
/// Returns `StoreError::Read` if the stored fingerprint cannot be read.
pub fn classify(name: &SecretName, current: &Fingerprint, store: &dyn Store) -> Result<Status> {
    let previous = store.fingerprint(name)?;
    let status = compare(previous.as_ref(), current);

    debug!(name = %name, fingerprint = %current, status = %status, "classified");
    Ok(status)
}
