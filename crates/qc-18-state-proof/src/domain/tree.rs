//! # Merkle Tree Model
//!
//! The hashed tree a state proof is cut from. Nodes are shared through `Arc`
//! so that a proof can hand back the very leaf objects it was built from, and
//! node hashes are write-once so that building any number of proofs from
//! the same tree, concurrently or not, can never disturb them.
//!
//! ```text
//!             root
//!           / |   \
//!          A  i0  i1
//!             /\  /\
//!            B C D null
//! ```
//!
//! Hashing the tree is done by [`crate::algorithms::digest_tree`].

use super::errors::{StateProofError, StateProofResult};
use super::hash::Hash;
use super::leaf_class::LeafHasher;
use super::route::MerkleRoute;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// A node of a Merkle tree: either an internal node or a leaf.
#[derive(Clone, Debug)]
pub enum MerkleNode {
    /// Node with an ordered list of (possibly null) children.
    Internal(Arc<MerkleInternal>),
    /// Node carrying an opaque serialized payload.
    Leaf(Arc<MerkleLeaf>),
}

impl MerkleNode {
    /// Build an internal node.
    pub fn internal(class_id: u64, children: Vec<Option<MerkleNode>>) -> Self {
        Self::Internal(Arc::new(MerkleInternal::new(class_id, children)))
    }

    /// Build a leaf node.
    pub fn leaf(class_id: u64, data: impl Into<Vec<u8>>) -> Self {
        Self::Leaf(Arc::new(MerkleLeaf::new(class_id, data)))
    }

    /// Class identifier of the node type.
    pub fn class_id(&self) -> u64 {
        match self {
            Self::Internal(internal) => internal.class_id(),
            Self::Leaf(leaf) => leaf.class_id(),
        }
    }

    /// Hash of the node, if it has been computed.
    pub fn hash(&self) -> Option<Hash> {
        match self {
            Self::Internal(internal) => internal.hash(),
            Self::Leaf(leaf) => leaf.hash(),
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// The leaf behind this node, if it is one.
    pub fn as_leaf(&self) -> Option<&Arc<MerkleLeaf>> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Internal(_) => None,
        }
    }

    /// The internal node behind this node, if it is one.
    pub fn as_internal(&self) -> Option<&Arc<MerkleInternal>> {
        match self {
            Self::Internal(internal) => Some(internal),
            Self::Leaf(_) => None,
        }
    }

    /// Walk `route` from this node.
    ///
    /// Returns `None` when the route leaves the tree, passes through a leaf
    /// or ends on a null slot.
    pub fn node_at_route(&self, route: &MerkleRoute) -> Option<&MerkleNode> {
        let mut node = self;
        for &step in route.steps() {
            node = match node {
                Self::Internal(internal) => internal.child(step as usize)?,
                Self::Leaf(_) => return None,
            };
        }
        Some(node)
    }

    /// All leaves in pre-order (child-index order), with their routes.
    pub fn leaves(&self) -> Vec<(MerkleRoute, Arc<MerkleLeaf>)> {
        let mut leaves = Vec::new();
        let mut stack = vec![(MerkleRoute::root(), self)];

        while let Some((route, node)) = stack.pop() {
            match node {
                Self::Leaf(leaf) => leaves.push((route, Arc::clone(leaf))),
                Self::Internal(internal) => {
                    // Reverse push so the leftmost child is visited first.
                    for (index, child) in internal.children().iter().enumerate().rev() {
                        if let Some(child) = child {
                            stack.push((route.child(index as u32), child));
                        }
                    }
                }
            }
        }

        leaves
    }
}

impl From<MerkleLeaf> for MerkleNode {
    fn from(leaf: MerkleLeaf) -> Self {
        Self::Leaf(Arc::new(leaf))
    }
}

impl From<Arc<MerkleLeaf>> for MerkleNode {
    fn from(leaf: Arc<MerkleLeaf>) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<MerkleInternal> for MerkleNode {
    fn from(internal: MerkleInternal) -> Self {
        Self::Internal(Arc::new(internal))
    }
}

/// Internal Merkle node.
#[derive(Debug)]
pub struct MerkleInternal {
    class_id: u64,
    children: Vec<Option<MerkleNode>>,
    hash: OnceLock<Hash>,
}

impl MerkleInternal {
    /// Create an unhashed internal node.
    pub fn new(class_id: u64, children: Vec<Option<MerkleNode>>) -> Self {
        Self {
            class_id,
            children,
            hash: OnceLock::new(),
        }
    }

    /// Class identifier.
    pub fn class_id(&self) -> u64 {
        self.class_id
    }

    /// Ordered child slots, `None` marking a null child.
    pub fn children(&self) -> &[Option<MerkleNode>] {
        &self.children
    }

    /// Child at `index`, or `None` for an out of range or null slot.
    pub fn child(&self, index: usize) -> Option<&MerkleNode> {
        self.children.get(index)?.as_ref()
    }

    /// Number of child slots, null slots included.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Hash of the node, if computed.
    pub fn hash(&self) -> Option<Hash> {
        self.hash.get().copied()
    }

    /// Set the hash. Fails if it was already set.
    pub fn set_hash(&self, hash: Hash) -> StateProofResult<()> {
        self.hash
            .set(hash)
            .map_err(|_| StateProofError::HashAlreadySet)
    }

    /// Existing hash, or the one produced by `compute` stored as the hash.
    pub(crate) fn hash_or_init(&self, compute: impl FnOnce() -> Hash) -> Hash {
        *self.hash.get_or_init(compute)
    }
}

/// Leaf Merkle node carrying an opaque payload.
///
/// Plain leaves are hashed from their bytes. Self-hashing leaves report a
/// hash computed from their bytes by their class algorithm (for example a
/// rolling queue hash), and that hash is used verbatim everywhere.
#[derive(Clone)]
pub struct MerkleLeaf {
    class_id: u64,
    data: Vec<u8>,
    hasher: Option<Arc<dyn LeafHasher>>,
    hash: OnceLock<Hash>,
}

impl MerkleLeaf {
    /// Create an unhashed plain leaf.
    pub fn new(class_id: u64, data: impl Into<Vec<u8>>) -> Self {
        Self {
            class_id,
            data: data.into(),
            hasher: None,
            hash: OnceLock::new(),
        }
    }

    /// Create a self-hashing leaf whose hash `hasher` derives from `data`.
    pub fn self_hashing(
        class_id: u64,
        data: impl Into<Vec<u8>>,
        hasher: Arc<dyn LeafHasher>,
    ) -> Self {
        Self {
            class_id,
            data: data.into(),
            hasher: Some(hasher),
            hash: OnceLock::new(),
        }
    }

    /// Class identifier.
    pub fn class_id(&self) -> u64 {
        self.class_id
    }

    /// Serialized payload bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Whether the leaf reports its own hash.
    pub fn is_self_hashing(&self) -> bool {
        self.hasher.is_some()
    }

    /// Hash reported by a self-hashing leaf, freshly derived from its bytes.
    pub fn self_hash(&self) -> Option<Hash> {
        self.hasher
            .as_ref()
            .map(|hasher| hasher.reported_hash(&self.data))
    }

    /// Hash of the leaf, if known.
    pub fn hash(&self) -> Option<Hash> {
        self.hash.get().copied().or_else(|| self.self_hash())
    }

    /// Set the hash of a plain leaf. Fails if already set or self-hashing.
    pub fn set_hash(&self, hash: Hash) -> StateProofResult<()> {
        if self.is_self_hashing() {
            return Err(StateProofError::HashAlreadySet);
        }
        self.hash
            .set(hash)
            .map_err(|_| StateProofError::HashAlreadySet)
    }

    /// Existing hash, or the one produced by `compute` stored as the hash.
    pub(crate) fn hash_or_init(&self, compute: impl FnOnce() -> Hash) -> Hash {
        *self.hash.get_or_init(|| match &self.hasher {
            Some(hasher) => hasher.reported_hash(&self.data),
            None => compute(),
        })
    }
}

impl fmt::Debug for MerkleLeaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerkleLeaf")
            .field("class_id", &self.class_id)
            .field("data", &self.data)
            .field("self_hashing", &self.is_self_hashing())
            .field("hash", &self.hash.get())
            .finish()
    }
}

/// Leaves compare by content; the cached hash is not part of identity.
impl PartialEq for MerkleLeaf {
    fn eq(&self, other: &Self) -> bool {
        self.class_id == other.class_id
            && self.data == other.data
            && self.self_hash() == other.self_hash()
    }
}

impl Eq for MerkleLeaf {}
