//! Ed25519 Signature Verification Adapter
//!
//! Implements the `SignatureVerifier` port with `shared-crypto` Ed25519.
//! The signed message is the raw 48-byte root hash.

use crate::domain::{Hash, PublicKey, Signature};
use crate::ports::SignatureVerifier;
use shared_crypto::{Ed25519PublicKey, Ed25519Signature};
use tracing::debug;

/// Ed25519 verifier using strict verification.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ed25519Verifier;

impl Ed25519Verifier {
    /// Create a new verifier.
    pub fn new() -> Self {
        Self
    }
}

impl SignatureVerifier for Ed25519Verifier {
    fn verify(&self, hash: &Hash, signature: &Signature, public_key: &PublicKey) -> bool {
        let key = match Ed25519PublicKey::from_slice(public_key.as_bytes()) {
            Ok(key) => key,
            Err(e) => {
                debug!("[qc-18] Rejecting public key: {}", e);
                return false;
            }
        };
        let sig = match Ed25519Signature::from_slice(signature.as_bytes()) {
            Ok(sig) => sig,
            Err(e) => {
                debug!("[qc-18] Rejecting signature: {}", e);
                return false;
            }
        };

        key.verify(hash.as_bytes(), &sig).is_ok()
    }
}
