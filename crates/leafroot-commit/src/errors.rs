use thiserror::Error;

/// Errors raised by the commitment layer.
#[derive(Error, Debug)]
pub enum CommitError {
    /// A tree cannot be built over zero leaves.
    #[error("cannot commit an empty leaf sequence")]
    EmptyLeafSequence,
    /// The requested leaf is not part of the tree.
    #[error("leaf not committed: {0}")]
    LeafNotFound(String),
    /// Leaf index past the end of the tree.
    #[error("leaf index {index} out of range for {leaf_count} leaves")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of leaves in the tree.
        leaf_count: usize,
    },
    /// Proof structure disagrees with its declared position.
    #[error("malformed proof: {0}")]
    MalformedProof(String),
    /// Text that is not a 32-byte hex digest.
    #[error("invalid hash '{0}': expected 64 hex characters")]
    InvalidHash(String),
    /// Bundle (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
