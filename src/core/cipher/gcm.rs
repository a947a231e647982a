//! AES-256-GCM backend.
//!
//! Blob format (binary, no delimiters, no length prefix):
//! ```text
//! [12 bytes: random nonce][N bytes: ciphertext][16 bytes: GCM tag]
//! ```
//!
//! A fresh nonce is drawn from the OS RNG for every message. The nonce
//! length is fixed by the cipher, so readers split at byte 12.

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Nonce};
use tracing::trace;
use zeroize::Zeroizing;

use super::{Cipher, EncryptionKey};
use crate::error::CipherError;

/// Nonce length in bytes (96 bits for AES-GCM).
pub const NONCE_LEN: usize = 12;

/// Authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// AES-256-GCM authenticated encryption.
pub struct AesGcm;

impl Cipher for AesGcm {
    type Key = EncryptionKey;

    fn name(&self) -> &'static str {
        "aes-256-gcm"
    }

    fn encrypt(&self, plaintext: &[u8], key: &EncryptionKey) -> Result<Vec<u8>, CipherError> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let cipher = Aes256Gcm::new(key.as_bytes().into());
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

        let ciphertext = cipher
            .encrypt(&nonce, plaintext)
            .map_err(|_| CipherError::EncryptionFailed)?;

        let mut blob = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        blob.extend_from_slice(&nonce);
        blob.extend_from_slice(&ciphertext);

        trace!(blob_len = blob.len(), "encrypted");
        Ok(blob)
    }

    fn decrypt(
        &self,
        blob: &[u8],
        key: &EncryptionKey,
    ) -> Result<Zeroizing<Vec<u8>>, CipherError> {
        trace!(blob_len = blob.len(), "decrypting");

        if blob.len() < NONCE_LEN {
            return Err(CipherError::Malformed { len: blob.len() });
        }

        let (nonce, ciphertext) = blob.split_at(NONCE_LEN);
        let cipher = Aes256Gcm::new(key.as_bytes().into());

        let plaintext = cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| CipherError::AuthenticationFailed)?;

        trace!(plaintext_len = plaintext.len(), "decrypted");
        Ok(Zeroizing::new(plaintext))
    }
}
