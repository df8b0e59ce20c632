//! Canonical leaf encoding for parsed document trees.
//!
//! A document tree (typed elements with attributes and ordered text/element
//! content) is flattened into an ordered sequence of leaf strings suitable
//! for a Merkle commitment, and can be searched for declared keywords. Both
//! traversals share one path encoding so that a keyword match points at the
//! exact leaves that prove it.
//!
//! Core invariants:
//! - Leaves appear in document order; the same tree always yields the same leaves
//! - Same-type siblings are told apart by 1-based ordinals, scoped per parent
//! - Attributes are encoded in lexicographic key order
//! - Malformed subtrees are skipped and reported, never fatal
//!
//! ```rust
//! use leafroot_canonical::{canonicalize, Document};
//!
//! let doc = Document::from_json_str(
//!     r#"{"type":"ul","content":[{"type":"li","content":["Item 1"]}]}"#,
//! )?;
//! let leaves = canonicalize(doc.root().expect("root element"));
//! assert_eq!(leaves.to_strings(), vec!["ul:1>li:1:1:Item1"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![deny(missing_docs)]

/// Leaf sequence construction.
pub mod canonicalizer;
/// Content fingerprints.
pub mod digest;
/// Document tree model and JSON loader.
pub mod document;
/// Error types for tree loading.
pub mod errors;
/// Hygiene report types emitted while loading trees.
pub mod hygiene;
/// Keyword extraction from document metadata.
pub mod keywords;
/// Keyword search over document trees.
pub mod locator;
/// Canonical path segment encoding.
pub mod path;

pub use canonicalizer::{canonicalize, Leaf, LeafSequence};
pub use digest::{sha256_digest, Digest, DigestAlg, SHA256_SIZE};
pub use document::{Document, Element, Node};
pub use errors::ParseError;
pub use hygiene::{HygieneReport, HygieneStatus, HygieneWarning};
pub use keywords::{extract_keywords, split_keywords};
pub use locator::{locate, KeywordMatch};
