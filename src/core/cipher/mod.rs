//! Cryptographic operations.
//!
//! Provides the encryption abstraction and its AES-256-GCM implementation.
//! Encryption must be authenticated: the store lives in a shared, writable
//! repository, so a reader has to be able to detect tampering.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module
//!
//! Note that the blob format is shared with other clients of the same
//! repository; a new backend means a new repository format.

use zeroize::Zeroizing;

use crate::error::CipherError;

mod gcm;
mod key;

pub use gcm::{AesGcm, NONCE_LEN, TAG_LEN};
pub use key::{EncryptionKey, KEY_LEN};

/// Authenticated encryption backend.
pub trait Cipher {
    /// Key material accepted by this backend.
    type Key;

    /// Encrypt plaintext into a self-describing blob.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::EncryptionFailed` if the backend rejects the input.
    fn encrypt(&self, plaintext: &[u8], key: &Self::Key) -> Result<Vec<u8>, CipherError>;

    /// Decrypt and authenticate a blob produced by `encrypt`.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::Malformed` if the blob cannot even hold a nonce,
    /// `CipherError::AuthenticationFailed` if the tag does not verify.
    fn decrypt(&self, blob: &[u8], key: &Self::Key) -> Result<Zeroizing<Vec<u8>>, CipherError>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}

/// Encrypt plaintext under the project key.
///
/// This is a convenience wrapper around `AesGcm::encrypt`.
pub fn encrypt(key: &EncryptionKey, plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
    AesGcm.encrypt(plaintext, key)
}

/// Decrypt a blob under the project key.
///
/// This is a convenience wrapper around `AesGcm::decrypt`.
pub fn decrypt(key: &EncryptionKey, blob: &[u8]) -> Result<Zeroizing<Vec<u8>>, CipherError> {
    AesGcm.decrypt(blob, key)
}
