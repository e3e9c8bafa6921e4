//! # Self-Hashing Leaf Classes
//!
//! Some leaf types hash themselves with a node-local algorithm (a rolling
//! queue hash, say) instead of the plain leaf rule. Whether a leaf does so is
//! a property of its class, never of the bytes it arrives with.
//!
//! ```rust,ignore
//! let mut classes = LeafClassRegistry::new();
//! classes.register(QUEUE_CLASS, Arc::new(rolling_queue_hash));
//!
//! let proof = StateProof::from_bytes_with_classes(&bytes, &config, &classes)?;
//! ```
//!
//! A decoded leaf of a registered class reports the hash its class algorithm
//! derives from the decoded bytes, so altering the bytes alters the hash.
//! Leaves of unregistered classes are plain leaves.

use super::hash::Hash;
use super::tree::MerkleLeaf;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Node-local hash algorithm of a self-hashing leaf class.
///
/// Must be a pure function of the leaf's serialized bytes.
pub trait LeafHasher: Send + Sync {
    /// Hash reported by a leaf holding `data`.
    fn reported_hash(&self, data: &[u8]) -> Hash;
}

impl<F> LeafHasher for F
where
    F: Fn(&[u8]) -> Hash + Send + Sync,
{
    fn reported_hash(&self, data: &[u8]) -> Hash {
        self(data)
    }
}

/// Self-hashing leaf classes known to a decoder, by class id.
#[derive(Clone, Default)]
pub struct LeafClassRegistry {
    hashers: HashMap<u64, Arc<dyn LeafHasher>>,
}

impl LeafClassRegistry {
    /// Registry with no self-hashing classes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `hasher` as the algorithm of `class_id`, replacing any earlier one.
    pub fn register(&mut self, class_id: u64, hasher: Arc<dyn LeafHasher>) -> &mut Self {
        if self.hashers.insert(class_id, hasher).is_some() {
            debug!("[qc-18] Replacing hasher for leaf class {:#x}", class_id);
        }
        self
    }

    /// Whether `class_id` is self-hashing.
    pub fn is_registered(&self, class_id: u64) -> bool {
        self.hashers.contains_key(&class_id)
    }

    /// Algorithm registered for `class_id`.
    pub fn hasher(&self, class_id: u64) -> Option<&Arc<dyn LeafHasher>> {
        self.hashers.get(&class_id)
    }

    /// Rebuild a leaf of `class_id` from its serialized bytes.
    pub fn leaf(&self, class_id: u64, data: Vec<u8>) -> MerkleLeaf {
        match self.hasher(class_id) {
            Some(hasher) => MerkleLeaf::self_hashing(class_id, data, Arc::clone(hasher)),
            None => MerkleLeaf::new(class_id, data),
        }
    }
}

impl fmt::Debug for LeafClassRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut classes: Vec<_> = self.hashers.keys().collect();
        classes.sort();
        f.debug_struct("LeafClassRegistry")
            .field("classes", &classes)
            .finish()
    }
}
