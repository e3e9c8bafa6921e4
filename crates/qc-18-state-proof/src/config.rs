//! # State Proof Configuration
//!
//! Limits applied when decoding proofs received from untrusted peers.

use serde::{Deserialize, Serialize};

/// Default maximum encoded proof size (64 MiB).
pub const DEFAULT_MAX_PROOF_BYTES: u64 = 64 * 1024 * 1024;

/// Default maximum number of signature entries.
pub const DEFAULT_MAX_SIGNATURES: usize = 4096;

/// Default maximum skeleton nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// State proof decoding configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateProofConfig {
    /// Maximum encoded proof size in bytes.
    pub max_proof_bytes: u64,

    /// Maximum number of signature entries in a proof.
    pub max_signatures: usize,

    /// Maximum skeleton depth, root counting as 1.
    pub max_depth: usize,
}

impl Default for StateProofConfig {
    fn default() -> Self {
        Self {
            max_proof_bytes: DEFAULT_MAX_PROOF_BYTES,
            max_signatures: DEFAULT_MAX_SIGNATURES,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl StateProofConfig {
    /// Create a config for testing (smaller values).
    pub fn for_testing() -> Self {
        Self {
            max_proof_bytes: 1024 * 1024,
            max_signatures: 64,
            max_depth: 32,
        }
    }
}
