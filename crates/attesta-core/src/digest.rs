//! # Content Digests
//!
//! Defines [`ContentDigest`] and [`sha256_digest()`], the fingerprint
//! primitive behind the ledger's tamper evidence.
//!
//! A digest can only be computed from [`CanonicalBytes`], enforced by the
//! signature of [`sha256_digest()`]. There is no code path that hashes
//! non-canonical bytes, so a fingerprint mismatch always means the record
//! content differs, never that two hosts serialized it differently.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;

/// A SHA-256 content digest.
///
/// Produced exclusively from [`CanonicalBytes`] via [`sha256_digest()`].
/// Displays as `sha256:<64 hex digits>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest([u8; 32]);

impl ContentDigest {
    /// Access the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render the digest as a lowercase hex string, without the algorithm
    /// prefix.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sha256:{}", self.to_hex())
    }
}

/// Compute a SHA-256 content digest from canonical bytes.
///
/// Accepts only `&CanonicalBytes`, not raw `&[u8]`. The compile-time
/// constraint is what makes the digest trustworthy as a fingerprint: every
/// input has been through the one canonicalization pipeline.
pub fn sha256_digest(data: &CanonicalBytes) -> ContentDigest {
    let hash = Sha256::digest(data.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    ContentDigest(bytes)
}
