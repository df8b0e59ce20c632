//! Document tree model and the tolerant JSON tree loader.
//!
//! Trees arrive in the `{"type", "attributes", "content"}` shape emitted by
//! HTML-to-JSON parsers. Loading never fails on unexpected structure: the
//! offending subtree is skipped and recorded in the [`HygieneReport`].

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::canonicalizer::{canonicalize, LeafSequence};
use crate::errors::ParseError;
use crate::hygiene::HygieneReport;
use crate::keywords::extract_keywords;
use crate::locator::{locate, KeywordMatch};
use crate::path::is_clean_whitespace;

/// Field holding the element type.
const TYPE_FIELD: &str = "type";
/// Field holding the attribute map.
const ATTRIBUTES_FIELD: &str = "attributes";
/// Field holding the ordered content list.
const CONTENT_FIELD: &str = "content";

/// A content item: raw text or a nested element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Raw text fragment.
    Text(String),
    /// Nested element.
    Element(Element),
}

impl Node {
    /// Builds a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// A typed element with sorted attributes, ordered content and auxiliary children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    content: Option<Vec<Node>>,
    auxiliary: Vec<Element>,
}

impl Element {
    /// Creates an element with no attributes and no content.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            content: None,
            auxiliary: Vec::new(),
        }
    }

    /// Adds (or replaces) an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Replaces the content list.
    pub fn with_content(mut self, content: Vec<Node>) -> Self {
        self.content = Some(content);
        self
    }

    /// Appends an auxiliary child.
    pub fn with_auxiliary(mut self, child: Element) -> Self {
        self.auxiliary.push(child);
        self
    }

    /// Element type (tag name).
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attributes in lexicographic key order.
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Looks up one attribute.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Ordered content, empty when the element has none.
    pub fn content(&self) -> &[Node] {
        self.content.as_deref().unwrap_or(&[])
    }

    /// Whether a `content` list is present at all.
    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    /// Elements reached through fields other than `content`.
    pub fn auxiliary(&self) -> &[Element] {
        &self.auxiliary
    }

    /// Direct text items, in order.
    pub fn direct_texts(&self) -> impl Iterator<Item = &str> {
        self.content().iter().filter_map(|node| match node {
            Node::Text(text) => Some(text.as_str()),
            Node::Element(_) => None,
        })
    }

    /// Direct element children, in order.
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.content().iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// True when at least one direct text item has non-whitespace characters.
    pub fn has_direct_text(&self) -> bool {
        self.direct_texts()
            .any(|text| text.chars().any(|c| !is_clean_whitespace(c)))
    }
}

/// A loaded document: its root element (if any) and the loader's hygiene report.
#[derive(Debug, Clone)]
pub struct Document {
    root: Option<Element>,
    report: HygieneReport,
}

impl Document {
    /// Wraps an already-built element tree.
    pub fn new(root: Element) -> Self {
        Self {
            root: Some(root),
            report: HygieneReport::new(),
        }
    }

    /// Parses JSON text and loads the tree.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidJson`] when the text is not JSON. Unexpected
    /// tree structure is never an error.
    pub fn from_json_str(input: &str) -> Result<Self, ParseError> {
        let value: Value =
            serde_json::from_str(input).map_err(|err| ParseError::from_json(err, input))?;
        Ok(Self::from_value(&value))
    }

    /// Loads a tree from an already-parsed JSON value.
    pub fn from_value(value: &Value) -> Self {
        let mut loader = TreeLoader::default();
        let root = match value {
            Value::Object(map) => loader.element(map),
            _ => {
                loader.skip("NonObjectRoot");
                None
            }
        };
        Self {
            root,
            report: loader.report,
        }
    }

    /// Root element; `None` when the input had no usable root.
    pub fn root(&self) -> Option<&Element> {
        self.root.as_ref()
    }

    /// Loader hygiene report.
    pub fn report(&self) -> &HygieneReport {
        &self.report
    }

    /// Canonical leaves; empty when there is no root element.
    pub fn leaves(&self) -> LeafSequence {
        self.root.as_ref().map(canonicalize).unwrap_or_default()
    }

    /// Keywords declared in the document's metadata.
    pub fn keywords(&self) -> Vec<String> {
        self.root.as_ref().map(extract_keywords).unwrap_or_default()
    }

    /// Elements whose direct text contains one of `keywords`.
    pub fn locate(&self, keywords: &[String]) -> Vec<KeywordMatch> {
        match &self.root {
            Some(root) => locate(root, keywords),
            None => Vec::new(),
        }
    }
}

#[derive(Default)]
struct TreeLoader {
    report: HygieneReport,
}

impl TreeLoader {
    fn skip(&mut self, code: &str) {
        tracing::debug!(code, "skipping malformed tree node");
        self.report.record(code);
    }

    fn element(&mut self, map: &Map<String, Value>) -> Option<Element> {
        let tag = match map.get(TYPE_FIELD) {
            Some(Value::String(tag)) if !tag.is_empty() => tag.clone(),
            Some(Value::String(_)) => {
                self.skip("EmptyType");
                return None;
            }
            _ => {
                self.skip("MissingType");
                return None;
            }
        };

        let mut element = Element::new(tag);
        element.attributes = self.attributes(map.get(ATTRIBUTES_FIELD));
        element.content = self.content(map.get(CONTENT_FIELD));

        for (key, value) in map {
            if key == TYPE_FIELD || key == ATTRIBUTES_FIELD || key == CONTENT_FIELD {
                continue;
            }
            match value {
                Value::Object(child) => element.auxiliary.extend(self.element(child)),
                Value::Array(items) => {
                    for item in items {
                        if let Value::Object(child) = item {
                            element.auxiliary.extend(self.element(child));
                        }
                    }
                }
                // Scalar fields carry no substructure.
                _ => {}
            }
        }

        Some(element)
    }

    fn attributes(&mut self, value: Option<&Value>) -> BTreeMap<String, String> {
        let mut attributes = BTreeMap::new();
        match value {
            None | Some(Value::Null) => {}
            Some(Value::Object(map)) => {
                for (key, value) in map {
                    match value {
                        Value::String(s) => {
                            attributes.insert(key.clone(), s.clone());
                        }
                        Value::Number(n) => {
                            attributes.insert(key.clone(), n.to_string());
                        }
                        Value::Bool(b) => {
                            attributes.insert(key.clone(), b.to_string());
                        }
                        _ => self.skip("NonStringAttribute"),
                    }
                }
            }
            Some(_) => self.skip("MalformedAttributes"),
        }
        attributes
    }

    fn content(&mut self, value: Option<&Value>) -> Option<Vec<Node>> {
        match value {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(vec![Node::Text(text.clone())]),
            Some(Value::Array(items)) => {
                let mut nodes = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(text) => nodes.push(Node::Text(text.clone())),
                        Value::Object(child) => {
                            if let Some(element) = self.element(child) {
                                nodes.push(Node::Element(element));
                            }
                        }
                        _ => self.skip("UnexpectedContentItem"),
                    }
                }
                Some(nodes)
            }
            Some(_) => {
                self.skip("UnexpectedContent");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hygiene::HygieneStatus;
    use serde_json::json;

    #[test]
    fn loads_elements_text_and_attributes() {
        let doc = Document::from_value(&json!({
            "type": "p",
            "attributes": {"class": "lead", "data-n": 3},
            "content": ["Hello ", {"type": "b", "content": "World"}]
        }));
        let root = doc.root().unwrap();
        assert_eq!(root.tag(), "p");
        assert_eq!(root.attribute("data-n"), Some("3"));
        assert_eq!(root.direct_texts().collect::<Vec<_>>(), vec!["Hello "]);
        let bold = root.children().next().unwrap();
        assert_eq!(bold.content(), &[Node::text("World")]);
        assert!(doc.report().is_clean());
    }

    #[test]
    fn string_content_is_a_single_item_list() {
        let doc = Document::from_value(&json!({"type": "title", "content": "Document"}));
        assert_eq!(doc.root().unwrap().content().len(), 1);
    }

    #[test]
    fn missing_content_is_distinguished_from_empty() {
        let doc = Document::from_value(&json!({"type": "ul", "content": [
            {"type": "br"},
            {"type": "li", "content": []}
        ]}));
        let children: Vec<_> = doc.root().unwrap().children().collect();
        assert!(!children[0].has_content());
        assert!(children[1].has_content());
    }

    #[test]
    fn typeless_subtrees_are_skipped_and_reported() {
        let doc = Document::from_value(&json!({
            "type": "div",
            "content": [
                {"content": ["orphan"]},
                {"type": "", "content": ["empty"]},
                42,
                {"type": "span", "content": ["kept"]}
            ]
        }));
        let root = doc.root().unwrap();
        assert_eq!(root.children().count(), 1);
        let report = doc.report();
        assert_eq!(report.status, HygieneStatus::Lossy);
        assert_eq!(report.count("MissingType"), 1);
        assert_eq!(report.count("EmptyType"), 1);
        assert_eq!(report.count("UnexpectedContentItem"), 1);
    }

    #[test]
    fn non_object_root_has_no_element() {
        let doc = Document::from_value(&json!(["not", "a", "tree"]));
        assert!(doc.root().is_none());
        assert_eq!(doc.report().count("NonObjectRoot"), 1);
    }

    #[test]
    fn object_fields_become_auxiliary_children() {
        let doc = Document::from_value(&json!({
            "type": "html",
            "content": [],
            "meta": {"type": "note", "content": "side"},
            "extras": [{"type": "a"}, "ignored", {"type": "b"}],
            "id": 7
        }));
        let aux: Vec<_> = doc
            .root()
            .unwrap()
            .auxiliary()
            .iter()
            .map(Element::tag)
            .collect();
        assert_eq!(aux, vec!["a", "b", "note"]);
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = Document::from_json_str("{\"type\": \"p\",").unwrap_err();
        assert!(err.to_string().contains("invalid document JSON"));
    }

    #[test]
    fn direct_text_ignores_whitespace_items() {
        let element = Element::new("body").with_content(vec![
            Node::text("\n   "),
            Element::new("h1").with_content(vec![Node::text("Hi")]).into(),
        ]);
        assert!(!element.has_direct_text());
    }
}
