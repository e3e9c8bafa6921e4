//! # Canonical Proof Codec
//!
//! Byte form of a state proof, shared by every node that builds or checks
//! one. Two proofs built from the same tree, payloads and signatures encode
//! to identical bytes however their inputs were ordered.
//!
//! ## Layout (bincode, fixed-width little-endian integers)
//!
//! ```text
//! version: u32                      currently 1
//! nodes: Vec<WireNode>              skeleton in pre-order
//! signatures: Vec<SignatureEntry>   sorted by node id, then bytes
//! ```
//!
//! An `Internal` wire node is followed by exactly `child_count` child nodes,
//! null slots included as `Null`. Decoding rebuilds the skeleton with an
//! explicit stack, so a hostile proof cannot exhaust the call stack, and
//! never allocates from a claimed `child_count`.
//!
//! A leaf travels as its class id and bytes only. Whether it hashes itself
//! is decided by the decoder's [`LeafClassRegistry`], and a self-hashing
//! leaf's hash is always rederived from the bytes it arrived with.

use crate::config::StateProofConfig;
use crate::domain::{
    canonicalize_signatures, Hash, LeafClassRegistry, SignatureEntry, SkeletonNode,
    StateProofError, StateProofResult,
};
use bincode::Options;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use std::sync::Arc;
use tracing::warn;

/// Current wire format version.
pub const WIRE_VERSION: u32 = 1;

/// One skeleton node in the pre-order wire listing.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireNode {
    /// Null child slot.
    Null,
    /// Pruned subtree hash.
    Pruned(Hash),
    /// Full payload leaf.
    Leaf {
        /// Class identifier
        class_id: u64,
        /// Serialized payload
        #[serde_as(as = "Bytes")]
        data: Vec<u8>,
    },
    /// Internal node header; its children follow.
    Internal {
        /// Class identifier
        class_id: u64,
        /// Number of child slots that follow
        child_count: u64,
    },
}

/// Body of the wire form, after the version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireBody {
    /// Skeleton nodes in pre-order
    pub nodes: Vec<WireNode>,
    /// Signature entries in canonical order
    pub signatures: Vec<SignatureEntry>,
}

fn wire_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
}

/// Flatten a skeleton into its pre-order wire listing.
pub fn flatten_skeleton(skeleton: &SkeletonNode) -> Vec<WireNode> {
    let mut nodes = Vec::with_capacity(skeleton.node_count());
    let mut stack: Vec<Option<&SkeletonNode>> = vec![Some(skeleton)];

    while let Some(slot) = stack.pop() {
        match slot {
            None => nodes.push(WireNode::Null),
            Some(SkeletonNode::PrunedHash(hash)) => nodes.push(WireNode::Pruned(*hash)),
            Some(SkeletonNode::FullLeaf(leaf)) => nodes.push(WireNode::Leaf {
                class_id: leaf.class_id(),
                data: leaf.data().to_vec(),
            }),
            Some(SkeletonNode::Internal { class_id, children }) => {
                nodes.push(WireNode::Internal {
                    class_id: *class_id,
                    child_count: children.len() as u64,
                });
                stack.extend(children.iter().rev().map(Option::as_ref));
            }
        }
    }

    nodes
}

struct Frame {
    class_id: u64,
    child_count: u64,
    children: Vec<Option<SkeletonNode>>,
}

/// Rebuild a skeleton from its pre-order wire listing.
///
/// The listing must describe exactly one tree no deeper than `max_depth`.
/// Leaves are rebuilt through `classes`.
pub fn rebuild_skeleton(
    nodes: impl IntoIterator<Item = WireNode>,
    max_depth: usize,
    classes: &LeafClassRegistry,
) -> StateProofResult<SkeletonNode> {
    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<SkeletonNode> = None;

    for node in nodes {
        if root.is_some() {
            return Err(StateProofError::MalformedSkeleton(
                "nodes after the end of the skeleton".into(),
            ));
        }
        if stack.len() + 1 > max_depth {
            return Err(StateProofError::DepthExceeded { max: max_depth });
        }

        let mut finished: Option<Option<SkeletonNode>> = match node {
            WireNode::Null if stack.is_empty() => {
                return Err(StateProofError::MalformedSkeleton("null root".into()));
            }
            WireNode::Null => Some(None),
            WireNode::Pruned(hash) => Some(Some(SkeletonNode::PrunedHash(hash))),
            WireNode::Leaf { class_id, data } => Some(Some(SkeletonNode::FullLeaf(Arc::new(
                classes.leaf(class_id, data),
            )))),
            WireNode::Internal {
                class_id,
                child_count: 0,
            } => Some(Some(SkeletonNode::Internal {
                class_id,
                children: Vec::new(),
            })),
            WireNode::Internal {
                class_id,
                child_count,
            } => {
                stack.push(Frame {
                    class_id,
                    child_count,
                    children: Vec::new(),
                });
                None
            }
        };

        // Hand completed subtrees to their parents, closing every parent
        // that has received all of its children.
        while let Some(slot) = finished.take() {
            match stack.last_mut() {
                None => root = slot,
                Some(frame) => {
                    frame.children.push(slot);
                    if frame.children.len() as u64 == frame.child_count {
                        if let Some(frame) = stack.pop() {
                            finished = Some(Some(SkeletonNode::Internal {
                                class_id: frame.class_id,
                                children: frame.children,
                            }));
                        }
                    }
                }
            }
        }
    }

    match root {
        Some(root) if stack.is_empty() => Ok(root),
        _ => Err(StateProofError::MalformedSkeleton(
            "node list ends inside the skeleton".into(),
        )),
    }
}

/// Encode a skeleton and signature list.
///
/// Signatures are canonicalised before writing.
pub fn encode(skeleton: &SkeletonNode, signatures: &[SignatureEntry]) -> StateProofResult<Vec<u8>> {
    let body = WireBody {
        nodes: flatten_skeleton(skeleton),
        signatures: canonicalize_signatures(signatures.iter().cloned()),
    };
    Ok(wire_options().serialize(&(WIRE_VERSION, &body))?)
}

/// Decode a skeleton and canonical signature list, enforcing `config` limits.
pub fn decode(
    bytes: &[u8],
    config: &StateProofConfig,
    classes: &LeafClassRegistry,
) -> StateProofResult<(SkeletonNode, Vec<SignatureEntry>)> {
    decode_checked(bytes, config, classes).map_err(|e| {
        warn!("[qc-18] Rejected state proof: {}", e);
        e
    })
}

fn decode_checked(
    bytes: &[u8],
    config: &StateProofConfig,
    classes: &LeafClassRegistry,
) -> StateProofResult<(SkeletonNode, Vec<SignatureEntry>)> {
    let len = bytes.len() as u64;
    if len > config.max_proof_bytes {
        return Err(StateProofError::ProofTooLarge {
            got: len,
            max: config.max_proof_bytes,
        });
    }

    let mut cursor = bytes;
    let version: u32 = wire_options().deserialize_from(&mut cursor)?;
    if version != WIRE_VERSION {
        return Err(StateProofError::UnsupportedVersion { version });
    }

    let body: WireBody = wire_options()
        .with_limit(config.max_proof_bytes)
        .reject_trailing_bytes()
        .deserialize(cursor)?;

    if body.signatures.len() > config.max_signatures {
        return Err(StateProofError::TooManySignatures {
            got: body.signatures.len(),
            max: config.max_signatures,
        });
    }

    let skeleton = rebuild_skeleton(body.nodes, config.max_depth, classes)?;
    Ok((skeleton, canonicalize_signatures(body.signatures)))
}
