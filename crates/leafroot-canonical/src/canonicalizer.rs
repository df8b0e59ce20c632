use serde::Serialize;
use std::fmt;

use crate::document::{Element, Node};
use crate::path::{clean_text, encode_segment, OrdinalScope, PathStack, TEXT_SEPARATOR};

/// One committed unit: the canonical path of a text-bearing element plus
/// one whitespace-free text fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Leaf {
    path: String,
    text: String,
}

impl Leaf {
    /// Canonical path of the element owning the text.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Cleaned text fragment.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Leaf string as committed: `<path>:<text>`.
    pub fn encoded(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.path, TEXT_SEPARATOR, self.text)
    }
}

/// Ordered leaves from one canonicalization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafSequence {
    leaves: Vec<Leaf>,
}

impl LeafSequence {
    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// True when the tree carried no non-whitespace text.
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Leaves in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Leaf> {
        self.leaves.iter()
    }

    /// Encoded leaf strings in document order, ready for commitment.
    pub fn to_strings(&self) -> Vec<String> {
        self.leaves.iter().map(Leaf::encoded).collect()
    }

    /// Leaves (with their index) whose path equals `path` exactly.
    pub fn find_by_path<'a>(&'a self, path: &'a str) -> impl Iterator<Item = (usize, &'a Leaf)> {
        self.leaves
            .iter()
            .enumerate()
            .filter(move |(_, leaf)| leaf.path == path)
    }
}

impl<'a> IntoIterator for &'a LeafSequence {
    type Item = &'a Leaf;
    type IntoIter = std::slice::Iter<'a, Leaf>;

    fn into_iter(self) -> Self::IntoIter {
        self.leaves.iter()
    }
}

/// Canonicalizes a document tree into its ordered leaf sequence.
///
/// Pre-order walk: each element takes its ordinal from its parent's counter
/// scope, text items emit `<joined path>:<cleaned text>`, content children
/// share one fresh scope, and each auxiliary child gets its own scope.
/// Identical trees always yield identical sequences.
pub fn canonicalize(root: &Element) -> LeafSequence {
    let mut leaves = Vec::new();
    let mut path = PathStack::new();
    visit(root, &mut OrdinalScope::new(), &mut path, &mut leaves);
    tracing::debug!(leaves = leaves.len(), "canonicalized document tree");
    LeafSequence { leaves }
}

fn visit(element: &Element, scope: &mut OrdinalScope, path: &mut PathStack, out: &mut Vec<Leaf>) {
    let ordinal = scope.next(element.tag());
    path.push(encode_segment(element, ordinal));

    let mut children = OrdinalScope::new();
    for node in element.content() {
        match node {
            Node::Text(text) => {
                let cleaned = clean_text(text);
                if !cleaned.is_empty() {
                    out.push(Leaf {
                        path: path.joined(),
                        text: cleaned,
                    });
                }
            }
            Node::Element(child) => visit(child, &mut children, path, out),
        }
    }

    for child in element.auxiliary() {
        visit(child, &mut OrdinalScope::new(), path, out);
    }

    path.pop();
}
