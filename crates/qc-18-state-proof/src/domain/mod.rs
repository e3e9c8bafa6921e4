//! # Domain Module
//!
//! Core domain types for State Proofs.
//!
//! ## Core Modules
//! - tree: hashed Merkle tree the proofs are cut from
//! - leaf_class: self-hashing leaf classes
//! - skeleton: pruned tree carried inside a proof
//! - address_book: node weights and public keys
//! - signature: node ids and untrusted signatures
//! - threshold: named stake fractions

pub mod address_book;
pub mod errors;
pub mod hash;
pub mod leaf_class;
pub mod route;
pub mod signature;
pub mod skeleton;
pub mod threshold;
pub mod tree;

pub use address_book::{Address, AddressBook};
pub use errors::{StateProofError, StateProofResult};
pub use hash::{Hash, HASH_LEN, NULL_HASH};
pub use leaf_class::{LeafClassRegistry, LeafHasher};
pub use route::MerkleRoute;
pub use signature::{canonicalize_signatures, NodeId, PublicKey, Signature, SignatureEntry};
pub use skeleton::SkeletonNode;
pub use threshold::{Threshold, ThresholdParseError};
pub use tree::{MerkleInternal, MerkleLeaf, MerkleNode};
