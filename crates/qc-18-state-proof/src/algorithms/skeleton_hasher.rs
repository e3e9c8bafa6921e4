//! # Skeleton Hasher
//!
//! Recomputes the root hash of the tree a skeleton was cut from.
//!
//! This is the only integrity check on payload content. A tampered payload or
//! a forged pruned hash yields a different root, which no honest signature
//! covers. The fold is total: any skeleton produces some hash.

use super::hash_combiner::{combine_children, leaf_content_hash};
use crate::domain::{Hash, SkeletonNode};

/// Fold the skeleton bottom-up into a root hash.
///
/// Full leaves are rehashed from their content, self-hashing ones through
/// their class algorithm; hashes cached on the leaf objects are ignored.
pub fn recompute_root_hash(skeleton: &SkeletonNode) -> Hash {
    match skeleton {
        SkeletonNode::PrunedHash(hash) => *hash,
        SkeletonNode::FullLeaf(leaf) => leaf_content_hash(leaf),
        SkeletonNode::Internal { class_id, children } => combine_children(
            *class_id,
            children
                .iter()
                .map(|child| child.as_ref().map(recompute_root_hash)),
        ),
    }
}
