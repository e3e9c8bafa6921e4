//! Ports for State Proofs
//!
//! Hexagonal architecture port definitions.

pub mod outbound;

pub use outbound::SignatureVerifier;
