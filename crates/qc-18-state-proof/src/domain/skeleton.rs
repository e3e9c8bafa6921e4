//! # Proof Skeleton
//!
//! A pruned copy of a hashed Merkle tree: the target leaves in full, every
//! node on a path from the root to a target, and nothing but a hash for
//! everything else.
//!
//! ```text
//!   source tree              skeleton for target D
//!
//!       root                       Internal
//!     /  |  \                    /    |     \
//!    A   i0  i1           Pruned(A) Pruned(i0) Internal
//!       / \  / \                                /     \
//!      B  C D  null                       FullLeaf(D)  null
//! ```

use super::tree::MerkleLeaf;
use super::hash::Hash;
use std::sync::Arc;

/// A node of a proof skeleton.
#[derive(Clone, Debug)]
pub enum SkeletonNode {
    /// A target leaf, carried in full.
    FullLeaf(Arc<MerkleLeaf>),
    /// A subtree with no targets, replaced by its hash.
    PrunedHash(Hash),
    /// An internal node on the path to at least one target.
    Internal {
        /// Class identifier of the original internal node
        class_id: u64,
        /// Child slots in original index order, `None` for a null slot
        children: Vec<Option<SkeletonNode>>,
    },
}

impl SkeletonNode {
    /// Target leaves in pre-order (original child-index order).
    pub fn payloads(&self) -> Vec<Arc<MerkleLeaf>> {
        let mut payloads = Vec::new();
        self.collect_payloads(&mut payloads);
        payloads
    }

    fn collect_payloads(&self, payloads: &mut Vec<Arc<MerkleLeaf>>) {
        match self {
            Self::FullLeaf(leaf) => payloads.push(Arc::clone(leaf)),
            Self::PrunedHash(_) => {}
            Self::Internal { children, .. } => {
                for child in children.iter().flatten() {
                    child.collect_payloads(payloads);
                }
            }
        }
    }

    /// Number of skeleton nodes, null slots excluded.
    pub fn node_count(&self) -> usize {
        match self {
            Self::FullLeaf(_) | Self::PrunedHash(_) => 1,
            Self::Internal { children, .. } => {
                1 + children
                    .iter()
                    .flatten()
                    .map(SkeletonNode::node_count)
                    .sum::<usize>()
            }
        }
    }

    /// Nesting depth; a lone leaf or hash has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::FullLeaf(_) | Self::PrunedHash(_) => 1,
            Self::Internal { children, .. } => {
                1 + children
                    .iter()
                    .flatten()
                    .map(SkeletonNode::depth)
                    .max()
                    .unwrap_or(0)
            }
        }
    }
}
