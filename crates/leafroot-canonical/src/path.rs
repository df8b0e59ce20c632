//! Canonical path segment encoding shared by the canonicalizer and the locator.

use std::collections::{BTreeMap, HashMap};

use crate::document::Element;

/// Separator between path segments: `html:1>body:1`.
pub const SEGMENT_SEPARATOR: char = '>';

/// Separator between a canonical path and its cleaned text.
pub const TEXT_SEPARATOR: char = ':';

/// Escape character for reserved characters inside tags, keys and values.
pub const ESCAPE: char = '\\';

/// Characters with structural meaning inside a path.
const RESERVED: [char; 7] = [ESCAPE, ',', '=', '[', ']', SEGMENT_SEPARATOR, TEXT_SEPARATOR];

/// Per-scope sibling ordinal counters, keyed by element type.
///
/// One scope covers exactly one parent's content list (or one auxiliary
/// subtree); it must never be shared across sibling scopes.
#[derive(Debug, Default)]
pub struct OrdinalScope {
    counters: HashMap<String, u32>,
}

impl OrdinalScope {
    /// Creates an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the counter for `tag` and returns its 1-based ordinal.
    pub fn next(&mut self, tag: &str) -> u32 {
        let counter = self.counters.entry(tag.to_string()).or_insert(0);
        *counter += 1;
        *counter
    }
}

/// Encodes one element as a canonical path segment.
///
/// Format: `<type>:<ordinal>[:<ordinal>][[k1=v1,k2=v2]]`. The repeated
/// ordinal marks a text-bearing element; attributes are emitted in
/// lexicographic key order. Type, keys and values are [`escape`]d.
pub fn encode_segment(element: &Element, ordinal: u32) -> String {
    let mut segment = format!("{}:{}", escape(element.tag()), ordinal);
    if element.has_direct_text() {
        segment.push_str(&format!(":{}", ordinal));
    }
    segment.push_str(&encode_attributes(element.attributes()));
    segment
}

/// Encodes an attribute map as `[k1=v1,k2=v2]`, or nothing when empty.
pub fn encode_attributes(attributes: &BTreeMap<String, String>) -> String {
    if attributes.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = attributes
        .iter()
        .map(|(key, value)| format!("{}={}", escape(key), escape(value)))
        .collect();
    format!("[{}]", pairs.join(","))
}

/// Backslash-escapes the reserved characters `\ , = [ ] > :` so a component
/// cannot imitate another attribute or segment.
pub fn escape(component: &str) -> String {
    let mut escaped = String::with_capacity(component.len());
    for c in component.chars() {
        if RESERVED.contains(&c) {
            escaped.push(ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Removes every whitespace character, including line breaks and BOMs.
pub fn clean_text(text: &str) -> String {
    text.chars().filter(|c| !is_clean_whitespace(*c)).collect()
}

/// Whitespace as stripped from leaf text.
pub(crate) fn is_clean_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Stack of segments from the root to the element being visited.
#[derive(Debug, Clone, Default)]
pub struct PathStack {
    segments: Vec<String>,
}

impl PathStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a segment when entering an element.
    pub fn push(&mut self, segment: String) {
        self.segments.push(segment);
    }

    /// Pops the segment of the element being left.
    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }

    /// Joins the segments into a canonical path.
    pub fn joined(&self) -> String {
        self.segments.join(&SEGMENT_SEPARATOR.to_string())
    }
}
