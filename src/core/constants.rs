//! Constants used throughout ghsec.
//!
//! Centralizes magic strings and configuration values. The naming pattern and
//! artifact extensions are an on-disk contract shared with other clients.

/// Glob matching plaintext secret files in the working directory.
pub const SECRET_PATTERN: &str = "secret.*";

/// Extension of ciphertext artifacts in the store.
pub const CIPHERTEXT_EXT: &str = "enc";

/// Extension of fingerprint artifacts in the store.
pub const FINGERPRINT_EXT: &str = "md5";

/// Home directory name relative to the user's home (~/.ghsec).
pub const HOME_DIR: &str = ".ghsec";

/// Per-project config files are named `.config.<project>.toml`.
pub const CONFIG_PREFIX: &str = ".config.";
pub const CONFIG_SUFFIX: &str = ".toml";

/// Branch used when none is configured.
pub const DEFAULT_BRANCH: &str = "master";

/// Committer email configured in every clone.
pub const COMMIT_EMAIL: &str = "ghsec@noreply.com";

/// Mode for store artifacts.
pub const ARTIFACT_MODE: u32 = 0o664;

/// Mode for extracted plaintext files.
pub const PLAINTEXT_MODE: u32 = 0o600;

/// Mode for project config files (they hold the key).
pub const CONFIG_MODE: u32 = 0o600;

/// Mode for the ghsec home directory.
pub const HOME_MODE: u32 = 0o700;
