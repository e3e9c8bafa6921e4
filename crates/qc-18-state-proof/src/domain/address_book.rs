//! # Address Book
//!
//! Read-only view of network membership used to weigh signatures:
//! node id → (weight, public key). A node with zero weight is still a member
//! and may sign; it simply adds nothing to the signed weight.

use super::errors::{StateProofError, StateProofResult};
use super::signature::{NodeId, PublicKey};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single address book entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Node identifier
    pub node_id: NodeId,
    /// Consensus weight (stake)
    pub weight: u64,
    /// Key that the node signs state roots with
    pub public_key: PublicKey,
}

impl Address {
    /// Create a new address.
    pub fn new(node_id: NodeId, weight: u64, public_key: PublicKey) -> Self {
        Self {
            node_id,
            weight,
            public_key,
        }
    }

    /// Copy of this address with a different weight.
    pub fn with_weight(&self, weight: u64) -> Self {
        Self {
            weight,
            ..self.clone()
        }
    }
}

/// Set of addresses with a cached total weight.
#[derive(Clone, Debug, Default)]
pub struct AddressBook {
    addresses: HashMap<NodeId, Address>,
    index_to_id: Vec<NodeId>,
    total_weight: u64,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of addresses. Later entries replace earlier ones
    /// with the same node id.
    pub fn from_addresses(addresses: impl IntoIterator<Item = Address>) -> StateProofResult<Self> {
        let mut book = Self::new();
        for address in addresses {
            book.insert(address)?;
        }
        Ok(book)
    }

    /// Insert an address, replacing any entry with the same node id.
    ///
    /// Replacement keeps the node's original index. Fails without modifying
    /// the book if the total weight would overflow.
    pub fn insert(&mut self, address: Address) -> StateProofResult<Option<Address>> {
        let previous_weight = self
            .addresses
            .get(&address.node_id)
            .map(|a| a.weight)
            .unwrap_or(0);

        let total_weight = (self.total_weight - previous_weight)
            .checked_add(address.weight)
            .ok_or(StateProofError::WeightOverflow {
                node_id: address.node_id.id(),
            })?;

        let node_id = address.node_id;
        let previous = self.addresses.insert(node_id, address);
        if previous.is_none() {
            self.index_to_id.push(node_id);
        }
        self.total_weight = total_weight;

        Ok(previous)
    }

    /// Get address by node id.
    pub fn get(&self, node_id: &NodeId) -> Option<&Address> {
        self.addresses.get(node_id)
    }

    /// Get node weight.
    pub fn weight_of(&self, node_id: &NodeId) -> Option<u64> {
        self.addresses.get(node_id).map(|a| a.weight)
    }

    /// Check if a node is in the book.
    pub fn contains(&self, node_id: &NodeId) -> bool {
        self.addresses.contains_key(node_id)
    }

    /// Node id at insertion index.
    pub fn node_id_at(&self, index: usize) -> Option<NodeId> {
        self.index_to_id.get(index).copied()
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Number of addresses.
    pub fn len(&self) -> usize {
        self.index_to_id.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.index_to_id.is_empty()
    }

    /// Iterate addresses in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.index_to_id
            .iter()
            .filter_map(move |id| self.addresses.get(id))
    }
}
