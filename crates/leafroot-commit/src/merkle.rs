//! SHA-256 binary Merkle tree over canonical leaf strings.
//!
//! * Leaves hash as `sha256(0x00 || leaf)`.
//! * Inner nodes hash as `sha256(0x01 || left || right)`.
//! * A missing right child is padded with [`empty_digest`].
//! * Proofs list one sibling per level, leaf to root, with the position of
//!   the running node (0 = left, 1 = right).

use serde::{Deserialize, Serialize};
use sha2::{Digest as Sha2Digest, Sha256};

use crate::errors::CommitError;
use crate::hash::Hash;

/// Number of children per internal node.
const ARITY: usize = 2;

/// Prefix for leaf hashes.
const LEAF_PREFIX: u8 = 0x00;

/// Prefix for inner node hashes.
const NODE_PREFIX: u8 = 0x01;

/// Preimage of the padding digest.
const EMPTY_PREIMAGE: &[u8] = b"leafroot:merkle:empty\0";

/// Digest standing in for a missing right-hand child.
pub fn empty_digest() -> Hash {
    Hash::from_bytes(Sha256::digest(EMPTY_PREIMAGE).into())
}

/// Hashes one leaf string.
pub fn hash_leaf(leaf: &str) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update([LEAF_PREFIX]);
    hasher.update(leaf.as_bytes());
    Hash::from_bytes(hasher.finalize().into())
}

/// Hashes two child digests into their parent.
pub fn hash_internal(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update([NODE_PREFIX]);
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    Hash::from_bytes(hasher.finalize().into())
}

/// One level of an inclusion proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    /// Position of the running node within its parent (`0` left, `1` right).
    pub position: u8,
    /// Digest of the other child.
    pub sibling: Hash,
}

/// Inclusion proof for one leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    /// 0-based index of the leaf.
    pub index: usize,
    /// Number of leaves committed by the tree.
    ///
    /// Not bound by the root: any count whose padding layout matches the
    /// sibling path verifies. Use [`Commitment::verify`](crate::Commitment::verify)
    /// when the leaf count matters.
    pub leaf_count: usize,
    /// Sibling path from leaf level to root.
    pub steps: Vec<ProofStep>,
}

/// Binary Merkle tree over an ordered leaf sequence.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    leaves: Vec<String>,
    levels: Vec<Vec<Hash>>,
}

impl MerkleTree {
    /// Builds the tree.
    ///
    /// # Errors
    ///
    /// Returns [`CommitError::EmptyLeafSequence`] when `leaves` is empty.
    pub fn build<I, S>(leaves: I) -> Result<Self, CommitError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let leaves: Vec<String> = leaves.into_iter().map(Into::into).collect();
        if leaves.is_empty() {
            return Err(CommitError::EmptyLeafSequence);
        }

        let hashed: Vec<Hash> = leaves.iter().map(|leaf| hash_leaf(leaf)).collect();
        let padding = empty_digest();
        let mut levels = vec![hashed];
        while levels.last().map_or(false, |level| level.len() > 1) {
            let current = &levels[levels.len() - 1];
            let next: Vec<Hash> = current
                .chunks(ARITY)
                .map(|pair| hash_internal(&pair[0], pair.get(1).unwrap_or(&padding)))
                .collect();
            levels.push(next);
        }

        tracing::debug!(
            leaves = leaves.len(),
            depth = levels.len() - 1,
            "built merkle tree"
        );
        Ok(Self { leaves, levels })
    }

    /// Root digest.
    pub fn root(&self) -> Hash {
        self.levels
            .last()
            .and_then(|level| level.first().copied())
            .unwrap_or_else(empty_digest)
    }

    /// Committed leaves in order.
    pub fn leaves(&self) -> &[String] {
        &self.leaves
    }

    /// Number of committed leaves.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Index of the first occurrence of `leaf`.
    pub fn position(&self, leaf: &str) -> Option<usize> {
        self.leaves.iter().position(|candidate| candidate == leaf)
    }

    /// Proves the first occurrence of `leaf`.
    ///
    /// # Errors
    ///
    /// Returns [`CommitError::LeafNotFound`] when `leaf` was not committed.
    pub fn prove(&self, leaf: &str) -> Result<MerkleProof, CommitError> {
        let index = self
            .position(leaf)
            .ok_or_else(|| CommitError::LeafNotFound(leaf.to_string()))?;
        self.prove_index(index)
    }

    /// Proves the leaf at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CommitError::IndexOutOfRange`] for an index past the last leaf.
    pub fn prove_index(&self, index: usize) -> Result<MerkleProof, CommitError> {
        if index >= self.leaf_count() {
            return Err(CommitError::IndexOutOfRange {
                index,
                leaf_count: self.leaf_count(),
            });
        }

        let mut steps = Vec::with_capacity(self.levels.len().saturating_sub(1));
        let mut current = index;
        for nodes in &self.levels[..self.levels.len() - 1] {
            let position = current % ARITY;
            let sibling_index = current ^ 1;
            let sibling = nodes.get(sibling_index).copied().unwrap_or_else(empty_digest);
            steps.push(ProofStep {
                position: position as u8,
                sibling,
            });
            current /= ARITY;
        }

        Ok(MerkleProof {
            index,
            leaf_count: self.leaf_count(),
            steps,
        })
    }
}

/// Recomputes the root implied by `leaf` and `proof`.
///
/// # Errors
///
/// Fails when the proof's positions or padding disagree with its declared
/// index and leaf count.
pub fn compute_root(leaf: &str, proof: &MerkleProof) -> Result<Hash, CommitError> {
    if proof.leaf_count == 0 || proof.index >= proof.leaf_count {
        return Err(CommitError::IndexOutOfRange {
            index: proof.index,
            leaf_count: proof.leaf_count,
        });
    }

    let mut hash = hash_leaf(leaf);
    let mut current = proof.index;
    let mut nodes_in_level = proof.leaf_count;

    for (level, step) in proof.steps.iter().enumerate() {
        let expected = current % ARITY;
        if step.position as usize != expected {
            return Err(CommitError::MalformedProof(format!(
                "position {} at level {} (expected {})",
                step.position, level, expected
            )));
        }
        let sibling_index = current ^ 1;
        if sibling_index >= nodes_in_level && step.sibling != empty_digest() {
            return Err(CommitError::MalformedProof(format!(
                "missing padding at level {}",
                level
            )));
        }

        hash = if expected == 0 {
            hash_internal(&hash, &step.sibling)
        } else {
            hash_internal(&step.sibling, &hash)
        };
        current /= ARITY;
        nodes_in_level = nodes_in_level.div_ceil(ARITY);
    }

    if current != 0 || nodes_in_level != 1 {
        return Err(CommitError::MalformedProof(format!(
            "path of {} steps does not reach the root",
            proof.steps.len()
        )));
    }

    Ok(hash)
}

/// True when `proof` shows `leaf` is committed under `root`.
pub fn verify(leaf: &str, proof: &MerkleProof, root: &Hash) -> bool {
    match compute_root(leaf, proof) {
        Ok(computed) => &computed == root,
        Err(err) => {
            tracing::debug!(error = %err, "rejecting malformed proof");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::DIGEST_SIZE;

    fn leaves(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("ul:1>li:{i}:{i}:Item{i}")).collect()
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let result = MerkleTree::build(Vec::<String>::new());
        assert!(matches!(result, Err(CommitError::EmptyLeafSequence)));
    }

    #[test]
    fn single_leaf_root_is_its_hash() {
        let tree = MerkleTree::build(["only"]).unwrap();
        assert_eq!(tree.root(), hash_leaf("only"));
        let proof = tree.prove("only").unwrap();
        assert!(proof.steps.is_empty());
        assert!(verify("only", &proof, &tree.root()));
    }

    #[test]
    fn odd_levels_are_padded_with_empty_digest() {
        let tree = MerkleTree::build(leaves(3)).unwrap();
        let ls = leaves(3);
        let left = hash_internal(&hash_leaf(&ls[0]), &hash_leaf(&ls[1]));
        let right = hash_internal(&hash_leaf(&ls[2]), &empty_digest());
        assert_eq!(tree.root(), hash_internal(&left, &right));
    }

    #[test]
    fn every_leaf_verifies_for_various_sizes() {
        for n in 1..=9 {
            let ls = leaves(n);
            let tree = MerkleTree::build(ls.clone()).unwrap();
            for leaf in &ls {
                let proof = tree.prove(leaf).unwrap();
                assert!(verify(leaf, &proof, &tree.root()), "n={} leaf={}", n, leaf);
            }
        }
    }

    #[test]
    fn leaf_hashes_are_prefixed() {
        let plain: [u8; DIGEST_SIZE] = Sha256::digest(b"a").into();
        assert_ne!(hash_leaf("a").as_bytes(), &plain);
    }

    #[test]
    fn flipped_position_is_rejected() {
        let tree = MerkleTree::build(leaves(4)).unwrap();
        let leaf = tree.leaves()[1].clone();
        let mut proof = tree.prove(&leaf).unwrap();
        proof.steps[0].position ^= 1;
        assert!(!verify(&leaf, &proof, &tree.root()));
    }

    #[test]
    fn non_empty_padding_is_rejected() {
        let tree = MerkleTree::build(leaves(3)).unwrap();
        let leaf = tree.leaves()[2].clone();
        let mut proof = tree.prove(&leaf).unwrap();
        proof.steps[0].sibling = hash_leaf("intruder");
        assert!(matches!(
            compute_root(&leaf, &proof),
            Err(CommitError::MalformedProof(_))
        ));
    }

    #[test]
    fn truncated_path_is_rejected() {
        let tree = MerkleTree::build(leaves(5)).unwrap();
        let leaf = tree.leaves()[0].clone();
        let mut proof = tree.prove(&leaf).unwrap();
        proof.steps.pop();
        assert!(compute_root(&leaf, &proof).is_err());
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let tree = MerkleTree::build(leaves(2)).unwrap();
        assert!(matches!(
            tree.prove_index(2),
            Err(CommitError::IndexOutOfRange { index: 2, leaf_count: 2 })
        ));
    }

    #[test]
    fn duplicate_leaves_prove_first_occurrence() {
        let tree = MerkleTree::build(["x", "y", "x"]).unwrap();
        assert_eq!(tree.prove("x").unwrap().index, 0);
    }
}
