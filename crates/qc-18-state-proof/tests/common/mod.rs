//! Shared fixtures for the state proof integration tests.

#![allow(dead_code)]

use qc_18_state_proof::{
    digest_tree, Address, AddressBook, Hash, LeafClassRegistry, MerkleLeaf, MerkleNode, NodeId,
    PublicKey, Signature, SignatureEntry, Threshold, NULL_HASH,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use shared_crypto::{Ed25519KeyPair, Sha384Hasher};
use std::sync::Arc;

pub const INTERNAL_CLASS: u64 = 0x1000;
pub const LEAF_CLASS: u64 = 0x2000;
pub const QUEUE_CLASS: u64 = 0x3000;

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn leaf(data: &str) -> Arc<MerkleLeaf> {
    Arc::new(MerkleLeaf::new(LEAF_CLASS, data))
}

fn node(leaf: &Arc<MerkleLeaf>) -> Option<MerkleNode> {
    Some(MerkleNode::from(Arc::clone(leaf)))
}

fn internal(children: Vec<Option<MerkleNode>>) -> Option<MerkleNode> {
    Some(MerkleNode::internal(INTERNAL_CLASS, children))
}

/// A tree that is a single leaf `A`.
pub fn size_one_tree() -> (MerkleNode, Vec<Arc<MerkleLeaf>>) {
    let a = leaf("A");
    (MerkleNode::from(Arc::clone(&a)), vec![a])
}

/// `root[A, i0[B, C], i1[D, null]]`, unhashed.
pub fn less_simple_tree_unhashed() -> (MerkleNode, Vec<Arc<MerkleLeaf>>) {
    let leaves: Vec<_> = ["A", "B", "C", "D"].into_iter().map(leaf).collect();
    let root = MerkleNode::internal(
        INTERNAL_CLASS,
        vec![
            node(&leaves[0]),
            internal(vec![node(&leaves[1]), node(&leaves[2])]),
            internal(vec![node(&leaves[3]), None]),
        ],
    );
    (root, leaves)
}

/// `root[A, i0[i4[], C], i1[D, i2[i3[F, G], E]]]`, unhashed.
pub fn less_simple_tree_extended_unhashed() -> (MerkleNode, Vec<Arc<MerkleLeaf>>) {
    let leaves: Vec<_> = ["A", "C", "D", "F", "G", "E"].into_iter().map(leaf).collect();
    let root = MerkleNode::internal(
        INTERNAL_CLASS,
        vec![
            node(&leaves[0]),
            internal(vec![internal(vec![]), node(&leaves[1])]),
            internal(vec![
                node(&leaves[2]),
                internal(vec![
                    internal(vec![node(&leaves[3]), node(&leaves[4])]),
                    node(&leaves[5]),
                ]),
            ]),
        ],
    );
    (root, leaves)
}

pub fn hashed((root, leaves): (MerkleNode, Vec<Arc<MerkleLeaf>>)) -> (MerkleNode, Vec<Arc<MerkleLeaf>>) {
    digest_tree(&root);
    (root, leaves)
}

pub fn less_simple_tree() -> (MerkleNode, Vec<Arc<MerkleLeaf>>) {
    hashed(less_simple_tree_unhashed())
}

pub fn less_simple_tree_extended() -> (MerkleNode, Vec<Arc<MerkleLeaf>>) {
    hashed(less_simple_tree_extended_unhashed())
}

/// Rolling hash over the comma-separated elements of a queue payload.
pub fn queue_hash(data: &[u8]) -> Hash {
    data.split(|&b| b == b',').fold(NULL_HASH, |running, element| {
        let mut hasher = Sha384Hasher::new();
        hasher.update(running.as_bytes()).update(element);
        Hash::new(hasher.finalize())
    })
}

/// Decoder classes with `QUEUE_CLASS` registered as self-hashing.
pub fn queue_classes() -> LeafClassRegistry {
    let mut classes = LeafClassRegistry::new();
    classes.register(QUEUE_CLASS, Arc::new(queue_hash));
    classes
}

/// Hashed `root[A, queue]` where `queue` is self-hashing.
pub fn queue_tree() -> (MerkleNode, Arc<MerkleLeaf>) {
    let queue = Arc::new(queue_classes().leaf(QUEUE_CLASS, b"tx1,tx2,tx3".to_vec()));
    let root = MerkleNode::internal(
        INTERNAL_CLASS,
        vec![
            Some(MerkleNode::leaf(LEAF_CLASS, "A")),
            Some(MerkleNode::from(Arc::clone(&queue))),
        ],
    );
    digest_tree(&root);
    (root, queue)
}

pub fn root_hash(root: &MerkleNode) -> Hash {
    root.hash().expect("tree is hashed")
}

/// A set of nodes with Ed25519 keys and the address book describing them.
pub struct TestNetwork {
    pub book: AddressBook,
    keys: Vec<(NodeId, Ed25519KeyPair)>,
}

impl TestNetwork {
    /// Nodes `0..weights.len()` with the given weights.
    pub fn with_weights(weights: &[u64]) -> Self {
        let members: Vec<(u64, u64)> = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| (i as u64, w))
            .collect();
        Self::with_members(&members)
    }

    /// `count` nodes of weight 1.
    pub fn uniform(count: usize) -> Self {
        Self::with_weights(&vec![1; count])
    }

    /// Nodes with explicit `(id, weight)` pairs.
    pub fn with_members(members: &[(u64, u64)]) -> Self {
        let keys: Vec<(NodeId, Ed25519KeyPair)> = members
            .iter()
            .map(|&(id, _)| (NodeId::new(id), keypair_for(id)))
            .collect();
        let book = AddressBook::from_addresses(members.iter().zip(&keys).map(
            |(&(id, weight), (_, keypair))| {
                Address::new(
                    NodeId::new(id),
                    weight,
                    PublicKey::new(keypair.public_key().as_bytes().to_vec()),
                )
            },
        ))
        .expect("test weights fit");
        Self { book, keys }
    }

    /// Random network of 10..20 nodes with distinct ids in `1..1000`.
    pub fn random(rng: &mut StdRng) -> Self {
        let size = rng.gen_range(10..20);
        let mut ids: Vec<u64> = (1..1000).collect();
        ids.shuffle(rng);
        let members: Vec<(u64, u64)> = ids[..size]
            .iter()
            .map(|&id| (id, rng.gen_range(0..100)))
            .collect();
        Self::with_members(&members)
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.keys.iter().map(|(id, _)| *id).collect()
    }

    /// Genuine signature by the node with id `id` over `hash`.
    pub fn sign(&self, id: NodeId, hash: &Hash) -> (NodeId, Signature) {
        let (_, keypair) = self
            .keys
            .iter()
            .find(|(node_id, _)| *node_id == id)
            .expect("node is in the network");
        (id, Signature::new(keypair.sign(hash.as_bytes()).to_vec()))
    }

    /// Genuine signatures by every node over `hash`.
    pub fn sign_all(&self, hash: &Hash) -> Vec<(NodeId, Signature)> {
        self.node_ids().into_iter().map(|id| self.sign(id, hash)).collect()
    }

    /// Genuine signatures, in a random order, from just enough nodes for
    /// `threshold`. Zero-weight nodes are skipped.
    pub fn sign_threshold(
        &self,
        rng: &mut StdRng,
        hash: &Hash,
        threshold: Threshold,
    ) -> Vec<(NodeId, Signature)> {
        let mut ids = self.node_ids();
        ids.shuffle(rng);

        let total = self.book.total_weight();
        let mut weight = 0;
        let mut signatures = Vec::new();
        for id in ids {
            if threshold.is_satisfied_by(weight, total) {
                break;
            }
            let node_weight = self.book.weight_of(&id).unwrap_or(0);
            if node_weight == 0 {
                continue;
            }
            weight += node_weight;
            signatures.push(self.sign(id, hash));
        }
        signatures
    }
}

fn keypair_for(id: u64) -> Ed25519KeyPair {
    let mut seed = [0x5Au8; 32];
    seed[..8].copy_from_slice(&id.to_le_bytes());
    Ed25519KeyPair::from_seed(seed)
}

pub fn entries(signatures: &[(NodeId, Signature)]) -> Vec<SignatureEntry> {
    signatures.iter().cloned().map(SignatureEntry::from).collect()
}
