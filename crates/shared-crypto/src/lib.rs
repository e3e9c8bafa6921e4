//! # Shared Crypto - Cryptographic Primitives
//!
//! **Status:** Production
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-384 | Merkle node digests (48 bytes) |
//! | `signatures` | Ed25519 | Node signatures over state root hashes |
//!
//! ## Security Properties
//!
//! - **SHA-384**: 192-bit collision resistance, immune to length extension
//! - **Ed25519**: Deterministic nonces, no RNG dependency, strict verification

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod signatures;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{sha384_hash, Digest384, Sha384Hasher, DIGEST_LEN};
pub use signatures::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
