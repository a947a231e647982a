//! ghsec - share encrypted secret files with your team through git.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Clone the secrets repository, write project config
//! │   ├── update        # Encrypt changed secret files and push them
//! │   ├── extract       # Decrypt the store into the working directory
//! │   ├── status        # Show what update would do
//! │   ├── rm            # Remove secrets from the store
//! │   ├── purge         # Forget a project locally
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # ~/.ghsec/.config.<project>.toml management
//!     ├── digest        # Content fingerprints for change detection
//!     ├── cipher/       # AES-256-GCM encryption and the project key
//!     ├── store/        # Directory-backed ciphertext + fingerprint store
//!     ├── detect        # New / modified / unchanged classification
//!     ├── vcs/          # Version control backends (git, offline)
//!     └── vault/        # Update, extract, remove workflows
//! ```
//!
//! # On-disk format
//!
//! For every plaintext file `secret.X` the store holds `secret.X.enc`
//! (`nonce ‖ ciphertext ‖ tag`) and `secret.X.md5` (Base64 MD5 of the
//! plaintext). Other implementations read the same layout.

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::vault::Vault;
