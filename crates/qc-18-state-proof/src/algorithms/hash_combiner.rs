//! # Hash Combination Rule
//!
//! The single rule used both to digest a source tree and to recompute a root
//! hash from a proof skeleton. Both directions must agree bit for bit.
//!
//! ```text
//! leaf      = SHA384(0x00 || class_id:u64be || len:u64be || data)
//! internal  = SHA384(0x01 || class_id:u64be || child_count:u64be || h(child_0) || ... )
//! null slot = NULL_HASH (48 zero bytes)
//! ```
//!
//! Self-hashing leaves are the exception: the hash their class algorithm
//! reports for their bytes is used verbatim in place of the leaf rule.

use crate::domain::{Hash, MerkleLeaf, MerkleNode, NULL_HASH};
use shared_crypto::Sha384Hasher;

/// Domain tag for leaf hashes.
pub const LEAF_DOMAIN: u8 = 0x00;

/// Domain tag for internal node hashes.
pub const INTERNAL_DOMAIN: u8 = 0x01;

/// Hash a plain leaf from its class id and serialized bytes.
pub fn hash_leaf_bytes(class_id: u64, data: &[u8]) -> Hash {
    let mut hasher = Sha384Hasher::new();
    hasher
        .update_u8(LEAF_DOMAIN)
        .update_u64(class_id)
        .update_u64(data.len() as u64)
        .update(data);
    Hash::new(hasher.finalize())
}

/// Hash of a leaf derived from its content alone.
///
/// Ignores any hash cached on the leaf: a plain leaf is rehashed from its
/// bytes, a self-hashing leaf contributes what its class algorithm reports
/// for its bytes.
pub fn leaf_content_hash(leaf: &MerkleLeaf) -> Hash {
    leaf.self_hash()
        .unwrap_or_else(|| hash_leaf_bytes(leaf.class_id(), leaf.data()))
}

/// Combine child hashes, in index order, into an internal node hash.
pub fn combine_children<I>(class_id: u64, children: I) -> Hash
where
    I: ExactSizeIterator<Item = Option<Hash>>,
{
    let mut hasher = Sha384Hasher::new();
    hasher
        .update_u8(INTERNAL_DOMAIN)
        .update_u64(class_id)
        .update_u64(children.len() as u64);
    for child in children {
        hasher.update(child.unwrap_or(NULL_HASH).as_bytes());
    }
    Hash::new(hasher.finalize())
}

/// Hash every unhashed node of the tree, bottom-up, and return the root hash.
///
/// Hashes that are already set are left alone, including wrong ones; the tree
/// is trusted to be what its owner says it is. Safe to call concurrently on a
/// shared tree: every node resolves to exactly one stored hash.
pub fn digest_tree(node: &MerkleNode) -> Hash {
    match node {
        MerkleNode::Leaf(leaf) => {
            leaf.hash_or_init(|| hash_leaf_bytes(leaf.class_id(), leaf.data()))
        }
        MerkleNode::Internal(internal) => {
            let child_hashes: Vec<Option<Hash>> = internal
                .children()
                .iter()
                .map(|child| child.as_ref().map(digest_tree))
                .collect();
            internal.hash_or_init(|| combine_children(internal.class_id(), child_hashes.into_iter()))
        }
    }
}
