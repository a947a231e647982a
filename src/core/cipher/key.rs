//! Project encryption key.
//!
//! The key is 32 raw bytes, stored in the local project config as standard
//! Base64. It is validated once when the config is loaded; afterwards the
//! type guarantees the length so the cipher never checks it again.

use aes_gcm::aead::{KeyInit, OsRng};
use aes_gcm::Aes256Gcm;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use zeroize::Zeroizing;

use crate::error::ConfigError;

/// Key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// A validated 32-byte symmetric key, wiped from memory on drop.
#[derive(Clone)]
pub struct EncryptionKey(Zeroizing<[u8; KEY_LEN]>);

impl EncryptionKey {
    /// Generate a new random key from the OS RNG.
    pub fn generate() -> Self {
        let generated = Aes256Gcm::generate_key(&mut OsRng);
        let mut bytes = Zeroizing::new([0u8; KEY_LEN]);
        bytes.copy_from_slice(generated.as_slice());
        Self(bytes)
    }

    /// Wrap raw key bytes.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    /// Decode a Base64 key from the project config.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidKey` if the text is not standard Base64
    /// or does not decode to exactly 32 bytes.
    pub fn from_base64(encoded: &str) -> Result<Self, ConfigError> {
        let decoded = Zeroizing::new(BASE64.decode(encoded.trim()).map_err(|_| {
            ConfigError::InvalidKey("must be a standard Base64 encoded string".to_string())
        })?);

        if decoded.len() != KEY_LEN {
            return Err(ConfigError::InvalidKey(format!(
                "must be {} bytes for AES-256, got {}",
                KEY_LEN,
                decoded.len()
            )));
        }

        let mut bytes = Zeroizing::new([0u8; KEY_LEN]);
        bytes.copy_from_slice(&decoded);
        Ok(Self(bytes))
    }

    /// Encode the key for the project config.
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.0.as_slice())
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl std::fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EncryptionKey(<redacted>)")
    }
}
