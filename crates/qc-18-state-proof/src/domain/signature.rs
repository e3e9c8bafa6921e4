//! # Signature Value Objects
//!
//! Node identities and the untrusted signatures they are claimed to have made.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use std::fmt;

/// Network node identifier.
///
/// Equality, ordering and hashing all derive from the numeric id alone, so
/// two values naming the same node are indistinguishable to any collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Create from the numeric id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Numeric id.
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node{}", self.0)
    }
}

/// Raw signature bytes, scheme-agnostic.
#[serde_as]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Signature(#[serde_as(as = "Bytes")] Vec<u8>);

impl Signature {
    /// Wrap raw bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the signature is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = &self.0[..self.0.len().min(4)];
        write!(f, "Signature({}.., {} bytes)", hex::encode(prefix), self.0.len())
    }
}

/// Raw public key bytes, scheme-agnostic.
#[serde_as]
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey(#[serde_as(as = "Bytes")] Vec<u8>);

impl PublicKey {
    /// Wrap raw bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = &self.0[..self.0.len().min(4)];
        write!(f, "PublicKey({}..)", hex::encode(prefix))
    }
}

/// A signature claimed to have been made by `node_id`. Untrusted.
///
/// Orders by node id first, which is the canonical wire order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SignatureEntry {
    /// Claimed signer
    pub node_id: NodeId,
    /// Claimed signature over the state root hash
    pub signature: Signature,
}

impl SignatureEntry {
    /// Create a new entry.
    pub fn new(node_id: NodeId, signature: Signature) -> Self {
        Self { node_id, signature }
    }
}

impl From<(NodeId, Signature)> for SignatureEntry {
    fn from((node_id, signature): (NodeId, Signature)) -> Self {
        Self { node_id, signature }
    }
}

/// Sort entries into canonical order and drop exact duplicates.
///
/// Distinct signatures claimed for the same node are all kept; the ledger
/// counts such a node at most once.
pub fn canonicalize_signatures(
    signatures: impl IntoIterator<Item = SignatureEntry>,
) -> Vec<SignatureEntry> {
    let mut entries: Vec<SignatureEntry> = signatures.into_iter().collect();
    entries.sort();
    entries.dedup();
    entries
}
