//! # Algorithms
//!
//! Proof construction, root recomputation and signature weighing.

pub mod hash_combiner;
pub mod signature_ledger;
pub mod skeleton_builder;
pub mod skeleton_hasher;

pub use hash_combiner::{combine_children, digest_tree, hash_leaf_bytes, leaf_content_hash};
pub use signature_ledger::{weight_of_valid_signatures, PARALLEL_THRESHOLD};
pub use skeleton_builder::build_skeleton;
pub use skeleton_hasher::recompute_root_hash;
