//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits with concrete cryptography.

mod ed25519_verifier;

pub use ed25519_verifier::Ed25519Verifier;
