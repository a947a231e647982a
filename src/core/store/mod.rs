//! Secret storage.
//!
//! A store maps a `SecretName` to two artifacts: the ciphertext blob
//! (`<name>.enc`) and the fingerprint of the plaintext it was made from
//! (`<name>.md5`). The pair is always written together; a fingerprint is
//! never left describing a different ciphertext.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `Store` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use std::path::PathBuf;

use crate::core::domain::{Fingerprint, SecretName};
use crate::error::Result;

mod fs;

pub use fs::Filesystem;

/// Ciphertext + fingerprint storage.
pub trait Store {
    /// Write the ciphertext and fingerprint for a secret.
    ///
    /// # Returns
    ///
    /// The artifact paths written, for staging.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` naming the artifact that failed. After a
    /// failure the entry either still holds its previous consistent pair or
    /// has no fingerprint at all.
    fn put(&self, name: &SecretName, blob: &[u8], fingerprint: &Fingerprint)
        -> Result<Vec<PathBuf>>;

    /// Last stored fingerprint for a secret, if any.
    ///
    /// A fingerprint without a ciphertext next to it does not count.
    fn fingerprint(&self, name: &SecretName) -> Result<Option<Fingerprint>>;

    /// All ciphertext entries currently in the store, sorted by name.
    ///
    /// Enumerates the backing storage on every call; the store may have
    /// changed underneath (e.g. after a pull).
    fn ciphertexts(&self) -> Result<Vec<(SecretName, Vec<u8>)>>;

    /// Delete both artifacts of a secret.
    ///
    /// # Returns
    ///
    /// The artifact paths removed, for staging.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if neither artifact exists.
    fn remove(&self, name: &SecretName) -> Result<Vec<PathBuf>>;

    /// Whether a ciphertext exists for the secret.
    fn contains(&self, name: &SecretName) -> bool;

    /// Whether either artifact of the secret exists, including a half
    /// entry left by an interrupted write.
    fn has_artifacts(&self, name: &SecretName) -> bool;
}
