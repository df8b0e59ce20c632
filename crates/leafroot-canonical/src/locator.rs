//! Keyword search producing canonical paths comparable with leaf paths.

use serde::Serialize;

use crate::digest::{sha256_digest, Digest};
use crate::document::{Element, Node};
use crate::path::{clean_text, encode_segment, OrdinalScope, PathStack, TEXT_SEPARATOR};

/// An element whose direct text contains a keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordMatch {
    /// Keyword that matched (as supplied by the caller).
    pub keyword: String,
    /// Canonical path from the root to the matching element.
    pub canonical_path: String,
    /// Direct text of the element with all whitespace removed.
    pub aggregated_text: String,
}

impl KeywordMatch {
    /// `<canonical_path>:<aggregated_text>`.
    pub fn full_tag(&self) -> String {
        format!("{}{}{}", self.canonical_path, TEXT_SEPARATOR, self.aggregated_text)
    }

    /// SHA-256 fingerprint of the full tag.
    pub fn fingerprint(&self) -> Digest {
        sha256_digest(self.full_tag().as_bytes())
    }
}

/// Finds every element whose direct text contains one of `keywords`.
///
/// Matching is a case-insensitive substring test over the element's direct
/// text items joined with spaces. Keywords are tried in order and only the
/// first hit is recorded per element. Paths are built with the same ordinal
/// and attribute rules as [`canonicalize`](crate::canonicalize).
pub fn locate(root: &Element, keywords: &[String]) -> Vec<KeywordMatch> {
    let needles: Vec<(&str, String)> = keywords
        .iter()
        .filter(|keyword| !keyword.trim().is_empty())
        .map(|keyword| (keyword.as_str(), keyword.to_lowercase()))
        .collect();
    if needles.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    let mut path = PathStack::new();
    search(root, &needles, &mut OrdinalScope::new(), &mut path, &mut matches);
    tracing::debug!(
        keywords = needles.len(),
        matches = matches.len(),
        "located keywords"
    );
    matches
}

fn search(
    element: &Element,
    needles: &[(&str, String)],
    scope: &mut OrdinalScope,
    path: &mut PathStack,
    out: &mut Vec<KeywordMatch>,
) {
    let ordinal = scope.next(element.tag());
    path.push(encode_segment(element, ordinal));

    let text = element.direct_texts().collect::<Vec<_>>().join(" ");
    let lowered = text.to_lowercase();
    if let Some((keyword, _)) = needles.iter().find(|(_, needle)| lowered.contains(needle)) {
        out.push(KeywordMatch {
            keyword: keyword.to_string(),
            canonical_path: path.joined(),
            aggregated_text: clean_text(&text),
        });
    }

    let mut children = OrdinalScope::new();
    for node in element.content() {
        if let Node::Element(child) = node {
            search(child, needles, &mut children, path, out);
        }
    }
    for child in element.auxiliary() {
        search(child, needles, &mut OrdinalScope::new(), path, out);
    }

    path.pop();
}
