//! Domain types.

mod fingerprint;
mod secret;
mod sync;

pub use fingerprint::Fingerprint;
pub use secret::SecretName;
pub use sync::{Change, ExtractReport, RemoveReport, Status, UpdateReport};
