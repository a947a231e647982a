//! Error types.
//!
//! Each concern has its own enum; `Error` aggregates them so callers can use
//! a single `Result` alias and `?` across module boundaries.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::cipher::NONCE_LEN;

/// Top-level error returned by every ghsec operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Vcs(#[from] VcsError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Encrypting a specific secret failed.
    #[error("failed to encrypt {name}: {source}")]
    Encrypt {
        name: String,
        #[source]
        source: CipherError,
    },

    /// Decrypting a specific store entry failed.
    #[error("failed to decrypt {name}: {source}")]
    Decrypt {
        name: String,
        #[source]
        source: CipherError,
    },

    /// A plaintext file in the working directory could not be read.
    #[error("failed to read {}: {source}", path.display())]
    ReadPlaintext {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A plaintext file could not be written back to the working directory.
    #[error("failed to write {}: {source}", path.display())]
    WritePlaintext {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error is an authentication failure on some entry.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(
            self,
            Error::Decrypt {
                source: CipherError::AuthenticationFailed,
                ..
            } | Error::Cipher(CipherError::AuthenticationFailed)
        )
    }
}

/// Project configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("project '{0}' is not initialized")]
    NotInitialized(String),

    #[error("project '{0}' is already initialized")]
    AlreadyInitialized(String),

    #[error("unable to determine home directory")]
    NoHomeDir,

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("invalid encryption key: {0}")]
    InvalidKey(String),
}

/// Authenticated encryption errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("authentication failed (wrong key or corrupted ciphertext)")]
    AuthenticationFailed,

    #[error("malformed ciphertext: {len} bytes is shorter than the {}-byte nonce", NONCE_LEN)]
    Malformed { len: usize },

    #[error("encryption failed")]
    EncryptionFailed,
}

/// Secret store errors.
///
/// Read and write failures carry the artifact path so the caller can tell
/// which half of an entry was affected.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("secret not found in store: {0}")]
    NotFound(String),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Version control collaborator errors.
#[derive(Error, Debug)]
pub enum VcsError {
    #[error("git not found on PATH")]
    NotInstalled,

    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("invalid repository url: {0}")]
    InvalidUrl(String),
}

/// Input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid secret name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
