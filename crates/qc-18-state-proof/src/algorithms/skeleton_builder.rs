//! # Proof Skeleton Builder
//!
//! Cuts a proof skeleton out of a hashed tree.
//!
//! ## Algorithm
//!
//! Pre-order descent from the root. A subtree that holds no target collapses
//! to `PrunedHash(subtree.hash)`. An internal node with a target below it is
//! kept with its full arity and null slots. A target leaf is kept in full.
//! Once every target has been found the remaining siblings are pruned
//! without being visited.
//!
//! Targets are matched by object identity (`Arc::ptr_eq`), never by content:
//! two leaves with equal bytes at different positions are different targets.

use crate::domain::{
    Hash, MerkleLeaf, MerkleNode, MerkleRoute, SkeletonNode, StateProofError, StateProofResult,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Build the skeleton proving `targets` against the root of `root`.
///
/// Duplicate targets collapse to one. With no targets the skeleton is the
/// pruned root hash. Fails with [`StateProofError::PayloadNotInTree`] when a
/// target is not a leaf of the tree, and with
/// [`StateProofError::UnhashedNode`] when a subtree that must be pruned has
/// no hash.
pub fn build_skeleton(
    root: &MerkleNode,
    targets: &[Arc<MerkleLeaf>],
) -> StateProofResult<SkeletonNode> {
    let wanted: HashSet<*const MerkleLeaf> = targets.iter().map(Arc::as_ptr).collect();

    let mut walk = Walk {
        remaining: wanted.len(),
        found: HashSet::with_capacity(wanted.len()),
        wanted,
    };

    let route = MerkleRoute::root();
    let skeleton = match walk.visit(root, &route)? {
        Some(kept) => kept,
        None => SkeletonNode::PrunedHash(pruned_hash(root, &route)?),
    };

    if let Some(index) = targets
        .iter()
        .position(|target| !walk.found.contains(&Arc::as_ptr(target)))
    {
        return Err(StateProofError::PayloadNotInTree { index });
    }

    debug!(
        "[qc-18] Built skeleton: {} payloads, {} nodes, depth {}",
        walk.found.len(),
        skeleton.node_count(),
        skeleton.depth()
    );

    Ok(skeleton)
}

struct Walk {
    wanted: HashSet<*const MerkleLeaf>,
    found: HashSet<*const MerkleLeaf>,
    remaining: usize,
}

impl Walk {
    /// `Some` when the subtree at `node` holds a target, `None` to prune it.
    fn visit(
        &mut self,
        node: &MerkleNode,
        route: &MerkleRoute,
    ) -> StateProofResult<Option<SkeletonNode>> {
        if self.remaining == 0 {
            return Ok(None);
        }

        match node {
            MerkleNode::Leaf(leaf) => {
                let ptr = Arc::as_ptr(leaf);
                if self.wanted.contains(&ptr) && self.found.insert(ptr) {
                    self.remaining -= 1;
                    return Ok(Some(SkeletonNode::FullLeaf(Arc::clone(leaf))));
                }
                Ok(None)
            }
            MerkleNode::Internal(internal) => {
                let mut kept: Vec<Option<SkeletonNode>> = Vec::with_capacity(internal.child_count());
                for (index, child) in internal.children().iter().enumerate() {
                    let result = match child {
                        Some(child) => self.visit(child, &route.child(index as u32))?,
                        None => None,
                    };
                    kept.push(result);
                }

                if kept.iter().all(Option::is_none) {
                    return Ok(None);
                }

                let mut children = Vec::with_capacity(kept.len());
                for (index, (child, slot)) in internal.children().iter().zip(kept).enumerate() {
                    children.push(match (child, slot) {
                        (None, _) => None,
                        (Some(_), Some(node)) => Some(node),
                        (Some(child), None) => Some(SkeletonNode::PrunedHash(pruned_hash(
                            child,
                            &route.child(index as u32),
                        )?)),
                    });
                }

                Ok(Some(SkeletonNode::Internal {
                    class_id: internal.class_id(),
                    children,
                }))
            }
        }
    }
}

fn pruned_hash(node: &MerkleNode, route: &MerkleRoute) -> StateProofResult<Hash> {
    node.hash().ok_or_else(|| StateProofError::UnhashedNode {
        route: route.clone(),
    })
}
