//! # Content Digests for Reference Data
//!
//! [`ContentDigest`] identifies a snapshot by the SHA-256 of its canonical
//! JSON rendering (compact separators, lexicographically sorted keys). Two
//! deployments running the same rule set produce the same digest regardless
//! of whether they loaded it from YAML, JSON, or the compiled builtin.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A SHA-256 content digest over canonical snapshot bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest([u8; 32]);

impl ContentDigest {
    /// Compute the digest of raw canonical bytes.
    pub fn of_bytes(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Access the raw 32-byte digest value.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Return the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sha256:{}", self.to_hex())
    }
}
