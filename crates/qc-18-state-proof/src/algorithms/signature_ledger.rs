//! # Signature Ledger
//!
//! Weighs an untrusted signature set against an address book.
//!
//! ## Rules
//!
//! - Entries are grouped by the numeric node id, so a node is counted at most
//!   once however many entries claim it.
//! - A node counts if any of its entries verifies over the expected hash with
//!   the public key the address book holds for it.
//! - Entries for ids absent from the address book are ignored.
//! - Zero-weight nodes verify like any other and add nothing.
//!
//! Nothing here fails: a bad signature only withholds weight.

use crate::domain::{Address, AddressBook, Hash, NodeId, Signature, SignatureEntry};
use crate::ports::SignatureVerifier;
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::debug;

/// Signers below this count are verified sequentially.
pub const PARALLEL_THRESHOLD: usize = 8;

/// Sum of the weights of address book members with a signature over
/// `expected_hash` that verifies.
pub fn weight_of_valid_signatures<V>(
    signatures: &[SignatureEntry],
    address_book: &AddressBook,
    expected_hash: &Hash,
    verifier: &V,
) -> u64
where
    V: SignatureVerifier + ?Sized,
{
    let mut by_node: BTreeMap<NodeId, Vec<&Signature>> = BTreeMap::new();
    for entry in signatures {
        by_node.entry(entry.node_id).or_default().push(&entry.signature);
    }

    let candidates: Vec<(&Address, Vec<&Signature>)> = by_node
        .into_iter()
        .filter_map(|(node_id, sigs)| match address_book.get(&node_id) {
            Some(address) => Some((address, sigs)),
            None => {
                debug!("[qc-18] Ignoring signature from unknown {}", node_id);
                None
            }
        })
        .collect();

    let signed = |(address, sigs): &(&Address, Vec<&Signature>)| -> u64 {
        let verified = sigs
            .iter()
            .any(|sig| verifier.verify(expected_hash, sig, &address.public_key));
        if verified {
            address.weight
        } else {
            debug!(
                "[qc-18] No valid signature from {} over {}",
                address.node_id, expected_hash
            );
            0
        }
    };

    // Bounded by the address book total, which is checked to fit in a u64.
    if candidates.len() < PARALLEL_THRESHOLD {
        candidates.iter().map(signed).sum()
    } else {
        candidates.par_iter().map(signed).sum()
    }
}
