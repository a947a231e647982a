//! Content fingerprints.
//!
//! MD5 over the file bytes, encoded as standard padded Base64. Other clients
//! compare these strings byte for byte, so the encoding is part of the
//! on-disk contract. MD5 is only used to skip re-encrypting unchanged files.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::core::domain::Fingerprint;

/// Length of an encoded fingerprint (16 digest bytes in padded Base64).
pub const FINGERPRINT_LEN: usize = 24;

/// Compute the fingerprint of a byte buffer.
pub fn fingerprint(bytes: &[u8]) -> Fingerprint {
    let digest = md5::compute(bytes);
    Fingerprint::new(BASE64.encode(digest.0))
}
