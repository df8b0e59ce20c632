//! Keyword extraction from the document's `<meta name="keywords">` element.

use crate::document::Element;

/// Extracts the declared keyword list.
///
/// Looks at the root's direct `head` children and, inside each, their direct
/// `meta` children for the first one with `name="keywords"` and a non-empty
/// `content` attribute. The content is split on `,`, each piece trimmed,
/// empty pieces dropped. Returns an empty list when no such element exists.
pub fn extract_keywords(root: &Element) -> Vec<String> {
    let declared = root
        .children()
        .filter(|child| child.tag() == "head")
        .flat_map(Element::children)
        .find_map(|meta| {
            if meta.tag() != "meta" || meta.attribute("name") != Some("keywords") {
                return None;
            }
            meta.attribute("content").filter(|content| !content.is_empty())
        });

    match declared {
        Some(content) => split_keywords(content),
        None => {
            tracing::debug!("no keywords meta element found");
            Vec::new()
        }
    }
}

/// Splits a comma-separated keyword list, trimming and dropping empty pieces.
pub fn split_keywords(content: &str) -> Vec<String> {
    content
        .split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}
