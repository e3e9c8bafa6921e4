//! # Domain Errors
//!
//! Error types for State Proofs.
//!
//! Only construction and decoding can fail. Validation of an untrusted proof
//! never returns an error: every anomaly (forged, missing or duplicate
//! signatures, tampered payloads) folds into `is_valid` returning `false`.

use super::route::MerkleRoute;
use thiserror::Error;

/// State proof error types.
#[derive(Debug, Error)]
pub enum StateProofError {
    /// A requested payload leaf is not reachable from the tree root.
    #[error("Payload {index} is not a leaf of the source tree")]
    PayloadNotInTree {
        /// Position of the payload in the caller-supplied list
        index: usize,
    },

    /// A node that the proof needs was never hashed.
    #[error("Node at route {route} has no hash; digest the tree before building a proof")]
    UnhashedNode {
        /// Route of the offending node
        route: MerkleRoute,
    },

    /// A route does not resolve to a leaf of the tree.
    #[error("Route {route} does not address a leaf")]
    InvalidRoute {
        /// The route that failed to resolve
        route: MerkleRoute,
    },

    /// A node hash is write-once and was already set.
    #[error("Node hash is already set")]
    HashAlreadySet,

    /// The address book total weight does not fit in a u64.
    #[error("Address book weight overflow adding node {node_id}")]
    WeightOverflow {
        /// Node whose weight overflowed the total
        node_id: u64,
    },

    /// Encoding or decoding of the wire form failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// Reading or writing a proof stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The wire form was produced by an unknown format version.
    #[error("Unsupported proof format version: {version}")]
    UnsupportedVersion {
        /// Version found on the wire
        version: u32,
    },

    /// Encoded proof exceeds the configured byte limit.
    #[error("Proof too large: {got} > {max} bytes")]
    ProofTooLarge {
        /// Encoded size
        got: u64,
        /// Configured maximum
        max: u64,
    },

    /// Encoded proof carries more signatures than allowed.
    #[error("Too many signatures: {got} > {max}")]
    TooManySignatures {
        /// Signatures on the wire
        got: usize,
        /// Configured maximum
        max: usize,
    },

    /// Skeleton nesting exceeds the configured depth.
    #[error("Skeleton depth exceeds {max}")]
    DepthExceeded {
        /// Configured maximum
        max: usize,
    },

    /// The pre-order node list does not describe exactly one tree.
    #[error("Malformed skeleton: {0}")]
    MalformedSkeleton(String),
}

/// Result type for state proof operations.
pub type StateProofResult<T> = Result<T, StateProofError>;
