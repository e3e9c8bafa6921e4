//! # SHA-384 Hashing
//!
//! Digest function for Merkle state trees.
//!
//! The digest width is part of the proof wire format: state roots are signed
//! by every node and embedded in every proof.

use sha2::{Digest, Sha384};

/// Length of a SHA-384 digest in bytes.
pub const DIGEST_LEN: usize = 48;

/// SHA-384 hash output (384-bit).
pub type Digest384 = [u8; DIGEST_LEN];

/// Stateful SHA-384 hasher.
#[derive(Clone, Default)]
pub struct Sha384Hasher {
    inner: Sha384,
}

impl Sha384Hasher {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            inner: Sha384::new(),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Update with a single byte (domain tags).
    pub fn update_u8(&mut self, value: u8) -> &mut Self {
        self.inner.update([value]);
        self
    }

    /// Update with a big-endian `u64`.
    pub fn update_u64(&mut self, value: u64) -> &mut Self {
        self.inner.update(value.to_be_bytes());
        self
    }

    /// Finalize and return hash, consuming the hasher.
    pub fn finalize(self) -> Digest384 {
        let result = self.inner.finalize();
        let mut output = [0u8; DIGEST_LEN];
        output.copy_from_slice(&result);
        output
    }
}

/// Hash data with SHA-384 (one-shot).
pub fn sha384_hash(data: &[u8]) -> Digest384 {
    let mut hasher = Sha384Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha384_known_vector() {
        let hash = sha384_hash(b"abc");
        assert_eq!(
            hex::encode(hash),
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
             8086072ba1e7cc2358baeca134c825a7"
        );
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(sha384_hash(b"test"), sha384_hash(b"test"));
    }

    #[test]
    fn test_different_inputs() {
        assert_ne!(sha384_hash(b"input1"), sha384_hash(b"input2"));
    }

    #[test]
    fn test_streaming() {
        let hash_oneshot = sha384_hash(b"hello world");

        let mut hasher = Sha384Hasher::new();
        hasher.update(b"hello ");
        hasher.update(b"world");

        assert_eq!(hash_oneshot, hasher.finalize());
    }

    #[test]
    fn test_integer_updates_are_big_endian() {
        let mut a = Sha384Hasher::new();
        a.update_u8(1).update_u64(3);

        let mut b = Sha384Hasher::new();
        b.update(&[1]);
        b.update(&[0, 0, 0, 0, 0, 0, 0, 3]);

        assert_eq!(a.finalize(), b.finalize());
    }
}
