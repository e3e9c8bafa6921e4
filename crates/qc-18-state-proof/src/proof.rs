//! # State Proof
//!
//! A skeleton of a signed state tree plus the signatures over its root.
//!
//! ## Lifecycle
//!
//! A proof is built once from a hashed tree and never changes afterwards.
//! A decoded proof behaves exactly like the one it was encoded from, except
//! that its payloads are fresh leaf objects rather than the tree's own.
//!
//! ## Validation
//!
//! `is_valid` recomputes the root hash from the skeleton and weighs the
//! signatures over that hash on every call. Nothing is cached, and the
//! source tree's hashes are never read or written during validation.

use crate::algorithms::{build_skeleton, recompute_root_hash, weight_of_valid_signatures};
use crate::codec;
use crate::config::StateProofConfig;
use crate::domain::{
    canonicalize_signatures, AddressBook, Hash, LeafClassRegistry, MerkleLeaf, MerkleNode,
    MerkleRoute, SignatureEntry, SkeletonNode, StateProofError, StateProofResult, Threshold,
};
use crate::ports::SignatureVerifier;
use std::io::{Read, Write};
use std::sync::Arc;
use tracing::debug;

/// Proof that a set of payload leaves belongs to a signed state tree.
#[derive(Clone, Debug)]
pub struct StateProof {
    skeleton: SkeletonNode,
    signatures: Vec<SignatureEntry>,
    payloads: Vec<Arc<MerkleLeaf>>,
}

impl StateProof {
    /// Build a proof of `payloads` from a hashed tree and signatures over its root.
    ///
    /// Signatures are accepted from an untrusted source as is; they are only
    /// put into canonical order here and checked by [`Self::is_valid`].
    pub fn new<S>(
        tree: &MerkleNode,
        signatures: impl IntoIterator<Item = S>,
        payloads: &[Arc<MerkleLeaf>],
    ) -> StateProofResult<Self>
    where
        S: Into<SignatureEntry>,
    {
        let skeleton = build_skeleton(tree, payloads)?;
        Ok(Self::from_parts(
            skeleton,
            canonicalize_signatures(signatures.into_iter().map(Into::into)),
        ))
    }

    /// Build a proof of the leaves at `routes`.
    pub fn from_routes<S>(
        tree: &MerkleNode,
        signatures: impl IntoIterator<Item = S>,
        routes: &[MerkleRoute],
    ) -> StateProofResult<Self>
    where
        S: Into<SignatureEntry>,
    {
        let payloads = routes
            .iter()
            .map(|route| {
                tree.node_at_route(route)
                    .and_then(MerkleNode::as_leaf)
                    .cloned()
                    .ok_or_else(|| StateProofError::InvalidRoute {
                        route: route.clone(),
                    })
            })
            .collect::<StateProofResult<Vec<_>>>()?;

        Self::new(tree, signatures, &payloads)
    }

    fn from_parts(skeleton: SkeletonNode, signatures: Vec<SignatureEntry>) -> Self {
        let payloads = skeleton.payloads();
        Self {
            skeleton,
            signatures,
            payloads,
        }
    }

    /// Payload leaves in tree order.
    pub fn payloads(&self) -> &[Arc<MerkleLeaf>] {
        &self.payloads
    }

    /// Signatures in canonical order.
    pub fn signatures(&self) -> &[SignatureEntry] {
        &self.signatures
    }

    /// The pruned tree.
    pub fn skeleton(&self) -> &SkeletonNode {
        &self.skeleton
    }

    /// Root hash recomputed from the skeleton.
    pub fn root_hash(&self) -> Hash {
        recompute_root_hash(&self.skeleton)
    }

    /// Weight of the address book members whose signature over the
    /// recomputed root verifies.
    pub fn signed_weight<V>(&self, address_book: &AddressBook, verifier: &V) -> u64
    where
        V: SignatureVerifier + ?Sized,
    {
        let root = self.root_hash();
        weight_of_valid_signatures(&self.signatures, address_book, &root, verifier)
    }

    /// Whether enough weight signed the recomputed root to satisfy `threshold`.
    pub fn is_valid<V>(&self, address_book: &AddressBook, threshold: Threshold, verifier: &V) -> bool
    where
        V: SignatureVerifier + ?Sized,
    {
        let weight = self.signed_weight(address_book, verifier);
        let total = address_book.total_weight();
        let valid = threshold.is_satisfied_by(weight, total);

        debug!(
            "[qc-18] State proof {}: weight {}/{} for {}",
            if valid { "valid" } else { "invalid" },
            weight,
            total,
            threshold
        );

        valid
    }

    /// Encode into canonical bytes.
    pub fn to_bytes(&self) -> StateProofResult<Vec<u8>> {
        codec::encode(&self.skeleton, &self.signatures)
    }

    /// Write canonical bytes to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> StateProofResult<()> {
        writer.write_all(&self.to_bytes()?)?;
        Ok(())
    }

    /// Decode from bytes, enforcing `config` limits.
    ///
    /// Every payload decodes as a plain leaf. Proofs carrying self-hashing
    /// payloads need [`Self::from_bytes_with_classes`].
    pub fn from_bytes(bytes: &[u8], config: &StateProofConfig) -> StateProofResult<Self> {
        Self::from_bytes_with_classes(bytes, config, &LeafClassRegistry::new())
    }

    /// Decode from bytes, rebuilding payloads of the self-hashing classes in
    /// `classes`.
    pub fn from_bytes_with_classes(
        bytes: &[u8],
        config: &StateProofConfig,
        classes: &LeafClassRegistry,
    ) -> StateProofResult<Self> {
        let (skeleton, signatures) = codec::decode(bytes, config, classes)?;
        Ok(Self::from_parts(skeleton, signatures))
    }

    /// Read a whole proof from `reader`, reading no more than the size limit
    /// allows.
    pub fn read_from<R: Read>(reader: R, config: &StateProofConfig) -> StateProofResult<Self> {
        Self::read_from_with_classes(reader, config, &LeafClassRegistry::new())
    }

    /// [`Self::read_from`] with self-hashing leaf classes.
    pub fn read_from_with_classes<R: Read>(
        reader: R,
        config: &StateProofConfig,
        classes: &LeafClassRegistry,
    ) -> StateProofResult<Self> {
        let mut bytes = Vec::new();
        reader
            .take(config.max_proof_bytes.saturating_add(1))
            .read_to_end(&mut bytes)?;
        Self::from_bytes_with_classes(&bytes, config, classes)
    }
}
