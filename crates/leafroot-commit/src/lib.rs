//! Merkle commitment over canonical leaf sequences.
//!
//! A verifier holding only the root can check that one disclosed leaf was
//! part of the committed sequence, without seeing the other leaves.
//!
//! ```rust
//! use leafroot_commit::{verify, MerkleTree};
//!
//! let tree = MerkleTree::build(["ul:1>li:1:1:Item1", "ul:1>li:2:2:Item2"])?;
//! let proof = tree.prove("ul:1>li:2:2:Item2")?;
//! assert!(verify("ul:1>li:2:2:Item2", &proof, &tree.root()));
//! assert!(!verify("ul:1>li:2:2:Item3", &proof, &tree.root()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![deny(missing_docs)]

/// Commitment and disclosure bundles.
pub mod bundle;
/// Error types for the commitment layer.
pub mod errors;
/// Node digest type.
pub mod hash;
/// Merkle tree construction, proofs and verification.
pub mod merkle;

pub use bundle::{Commitment, InclusionBundle};
pub use errors::CommitError;
pub use hash::{Hash, DIGEST_SIZE};
pub use merkle::{compute_root, verify, MerkleProof, MerkleTree, ProofStep};
