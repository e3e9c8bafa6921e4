//! # Merkle Routes
//!
//! A route is the ordered list of child indices walked from the root to
//! reach a node. The root itself has the empty route.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a node inside a Merkle tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MerkleRoute(Vec<u32>);

impl MerkleRoute {
    /// The route of the root node.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Route of the `index`-th child of the node at this route.
    pub fn child(&self, index: u32) -> Self {
        let mut steps = Vec::with_capacity(self.0.len() + 1);
        steps.extend_from_slice(&self.0);
        steps.push(index);
        Self(steps)
    }

    /// Child indices from the root.
    pub fn steps(&self) -> &[u32] {
        &self.0
    }

    /// Number of steps (0 for the root).
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Whether this is the root route.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `self` is an ancestor of (or equal to) `other`.
    pub fn is_ancestor_of(&self, other: &MerkleRoute) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl From<Vec<u32>> for MerkleRoute {
    fn from(steps: Vec<u32>) -> Self {
        Self(steps)
    }
}

impl fmt::Display for MerkleRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
