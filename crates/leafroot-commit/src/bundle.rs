use serde::{Deserialize, Serialize};

use crate::errors::CommitError;
use crate::hash::Hash;
use crate::merkle::{verify, MerkleProof, MerkleTree};

/// Root plus the ordered leaves it commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment {
    /// Merkle root.
    pub root: Hash,
    /// Committed leaves in order.
    pub leaves: Vec<String>,
}

impl Commitment {
    /// Checks `proof` for `leaf` against this commitment.
    ///
    /// Stricter than [`verify`]: the proof's leaf count must equal the number of
    /// committed leaves and `leaf` must sit at the proof's index.
    pub fn verify(&self, leaf: &str, proof: &MerkleProof) -> bool {
        if proof.leaf_count != self.leaves.len() {
            tracing::debug!(
                claimed = proof.leaf_count,
                committed = self.leaves.len(),
                "rejecting proof with mismatched leaf count"
            );
            return false;
        }
        if self.leaves.get(proof.index).map(String::as_str) != Some(leaf) {
            return false;
        }
        verify(leaf, proof, &self.root)
    }
}

impl From<&MerkleTree> for Commitment {
    fn from(tree: &MerkleTree) -> Self {
        Self {
            root: tree.root(),
            leaves: tree.leaves().to_vec(),
        }
    }
}

/// Self-contained disclosure of one leaf: the leaf, the claimed root and the proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionBundle {
    /// Disclosed leaf string.
    pub leaf: String,
    /// Root the leaf is claimed to be committed under.
    pub root: Hash,
    /// Inclusion proof.
    pub proof: MerkleProof,
}

impl InclusionBundle {
    /// Proves `leaf` against `tree`.
    pub fn prove(tree: &MerkleTree, leaf: &str) -> Result<Self, CommitError> {
        Ok(Self {
            leaf: leaf.to_string(),
            root: tree.root(),
            proof: tree.prove(leaf)?,
        })
    }

    /// Proves the leaf at `index` of `tree`.
    pub fn prove_index(tree: &MerkleTree, index: usize) -> Result<Self, CommitError> {
        let proof = tree.prove_index(index)?;
        Ok(Self {
            leaf: tree.leaves()[index].clone(),
            root: tree.root(),
            proof,
        })
    }

    /// Checks the proof against the bundle's own root.
    pub fn verify(&self) -> bool {
        verify(&self.leaf, &self.proof, &self.root)
    }

    /// Checks the proof against a root obtained independently.
    pub fn verify_against(&self, root: &Hash) -> bool {
        verify(&self.leaf, &self.proof, root)
    }

    /// Parses a bundle from JSON.
    pub fn from_json(input: &str) -> Result<Self, CommitError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Pretty JSON encoding.
    pub fn to_json(&self) -> Result<String, CommitError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
