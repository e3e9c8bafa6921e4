//! # Digest Value Object
//!
//! Fixed-width node digest shared by trees, skeletons and signatures.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use shared_crypto::DIGEST_LEN;
use std::fmt;

/// Length of every node hash in bytes (SHA-384).
pub const HASH_LEN: usize = DIGEST_LEN;

/// Hash contributed by a null child slot of an internal node.
pub const NULL_HASH: Hash = Hash([0u8; HASH_LEN]);

/// A 48-byte Merkle node digest.
#[serde_as]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hash(#[serde_as(as = "Bytes")] [u8; HASH_LEN]);

impl Hash {
    /// Wrap raw digest bytes.
    pub const fn new(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// Copy into an owned vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl From<[u8; HASH_LEN]> for Hash {
    fn from(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short form keeps skeleton dumps readable.
        write!(f, "Hash({}..)", hex::encode(&self.0[..6]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_hash_is_zero() {
        assert!(NULL_HASH.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_display_is_full_hex() {
        let hash = Hash::new([0xAB; HASH_LEN]);
        assert_eq!(hash.to_string(), "ab".repeat(HASH_LEN));
    }

    #[test]
    fn test_debug_is_abbreviated() {
        let hash = Hash::new([0x01; HASH_LEN]);
        assert_eq!(format!("{:?}", hash), "Hash(010101010101..)");
    }
}
