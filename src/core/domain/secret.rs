//! Secret name type.
//!
//! A `SecretName` is the base name of a plaintext secret file. It is the join
//! key between the plaintext in the working directory and the `.enc` / `.md5`
//! artifacts in the store.

use std::str::FromStr;
use std::sync::OnceLock;

use glob::Pattern;
use serde::Serialize;

use crate::core::constants::{CIPHERTEXT_EXT, FINGERPRINT_EXT, SECRET_PATTERN};
use crate::error::{Error, ValidationError};

fn secret_pattern() -> &'static Pattern {
    static PATTERN: OnceLock<Pattern> = OnceLock::new();
    PATTERN.get_or_init(|| Pattern::new(SECRET_PATTERN).unwrap_or_default())
}

/// Validated name of a secret file (e.g. `secret.db.password`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SecretName(String);

impl SecretName {
    /// Validate a plaintext file name.
    ///
    /// The name must be a bare file name matching `secret.*` that does not
    /// itself carry a store artifact extension.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` describing the first rule broken.
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        let invalid = |reason: &str| ValidationError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(invalid("empty name"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("must be a file name, not a path"));
        }
        if !secret_pattern().matches(name) {
            return Err(invalid(&format!("does not match {}", SECRET_PATTERN)));
        }
        for ext in [CIPHERTEXT_EXT, FINGERPRINT_EXT] {
            if name.ends_with(&format!(".{}", ext)) {
                return Err(invalid(&format!("'.{}' files are store artifacts", ext)));
            }
        }

        Ok(Self(name.to_string()))
    }

    /// Recover the secret name from a ciphertext file name (`X.enc` → `X`).
    ///
    /// Returns `None` for anything that is not a ciphertext of a valid name.
    pub fn from_ciphertext_file(file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(&format!(".{}", CIPHERTEXT_EXT))?;
        Self::parse(stem).ok()
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the ciphertext artifact.
    pub fn ciphertext_file(&self) -> String {
        format!("{}.{}", self.0, CIPHERTEXT_EXT)
    }

    /// File name of the fingerprint artifact.
    pub fn fingerprint_file(&self) -> String {
        format!("{}.{}", self.0, FINGERPRINT_EXT)
    }
}

impl FromStr for SecretName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s)?)
    }
}

impl AsRef<str> for SecretName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SecretName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
