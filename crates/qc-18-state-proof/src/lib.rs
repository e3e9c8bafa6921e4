//! # QC-18 State Proofs
//!
//! Merkle multiproofs over a signed state tree, checked against a
//! stake-weighted threshold.
//!
//! **Subsystem ID:** 18
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Let a party that holds only the address book (node id → weight, public
//! key) check that a few named leaves of a large hashed state tree are
//! authentic and were signed by enough stake, without the rest of the tree.
//!
//! ## Flow
//!
//! ```text
//! build:    hashed tree + target leaves + signatures
//!             -> skeleton builder -> StateProof { skeleton, signatures }
//! validate: skeleton -> recomputed root hash
//!             -> signature ledger (address book, verifier) -> weight
//!             -> threshold.is_satisfied_by(weight, total)
//! ```
//!
//! ## Security Properties
//!
//! | Defense | Description |
//! |---------|-------------|
//! | Root recomputation | Payloads are rehashed on every check; cached hashes are never trusted |
//! | Class-bound self-hashing | Only registered leaf classes hash themselves, always from their own bytes |
//! | Dedup by node id | A node's weight counts at most once |
//! | Unknown signers ignored | Ids outside the address book carry no weight |
//! | Canonical bytes | Equal proofs encode identically regardless of input order |
//! | Bounded decoding | Size, signature count and depth limits; no recursion on wire input |
//!
//! ## Module Structure
//!
//! ```text
//! qc-18-state-proof/
//! ├── domain/          # Tree, leaf classes, skeleton, address book, signatures, thresholds, errors
//! ├── algorithms/      # Hash rule, skeleton builder/hasher, signature ledger
//! ├── ports/           # SignatureVerifier
//! ├── adapters/        # Ed25519Verifier
//! ├── codec.rs         # Canonical wire form
//! ├── proof.rs         # StateProof
//! └── config.rs        # StateProofConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod codec;
pub mod config;
pub mod domain;
pub mod ports;
pub mod proof;

// Re-exports
pub use adapters::Ed25519Verifier;
pub use algorithms::{
    build_skeleton, combine_children, digest_tree, hash_leaf_bytes, recompute_root_hash,
    weight_of_valid_signatures,
};
pub use config::StateProofConfig;
pub use domain::{
    canonicalize_signatures, Address, AddressBook, Hash, LeafClassRegistry, LeafHasher,
    MerkleInternal, MerkleLeaf, MerkleNode, MerkleRoute, NodeId, PublicKey, Signature,
    SignatureEntry, SkeletonNode, StateProofError, StateProofResult, Threshold,
    ThresholdParseError, HASH_LEN, NULL_HASH,
};
pub use ports::SignatureVerifier;
pub use proof::StateProof;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
