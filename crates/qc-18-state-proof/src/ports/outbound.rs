//! Driven Ports (SPI - Outbound Dependencies)
//!
//! What the state proof core needs from the outside world: a way to check a
//! signature. The scheme is pluggable so that tests and production can use
//! different algorithms.

use crate::domain::{Hash, PublicKey, Signature};

/// Checks that `signature` over `hash` was produced by `public_key`.
///
/// Must return `false` rather than panic on malformed keys or signatures:
/// every input reaching this port comes from an untrusted proof.
pub trait SignatureVerifier: Send + Sync {
    /// Verify one signature over a root hash.
    fn verify(&self, hash: &Hash, signature: &Signature, public_key: &PublicKey) -> bool;
}

impl<F> SignatureVerifier for F
where
    F: Fn(&Hash, &Signature, &PublicKey) -> bool + Send + Sync,
{
    fn verify(&self, hash: &Hash, signature: &Signature, public_key: &PublicKey) -> bool {
        self(hash, signature, public_key)
    }
}
