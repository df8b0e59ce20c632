use leafroot_canonical::{canonicalize, locate, Document, Element, Node};
use serde_json::{json, Value};

fn article() -> Value {
    json!({
        "type": "article",
        "attributes": {"id": "post-7", "class": "entry"},
        "content": [
            {"type": "h2", "content": ["Release notes"]},
            {"type": "p", "content": ["Another One"]},
            {"type": "p", "content": ["Another One"]},
            {"type": "p", "content": ["Another One"]},
            {"type": "p", "content": ["Another One"]},
            {"type": "a", "attributes": {"href": "/more"}, "content": ["more"]}
        ]
    })
}

fn leaves_of(value: &Value) -> Vec<String> {
    Document::from_value(value).leaves().to_strings()
}

#[test]
fn canonicalization_is_deterministic() {
    let first = leaves_of(&article());
    let second = leaves_of(&article());
    assert_eq!(first, second);

    let doc = Document::from_value(&article());
    let root = doc.root().unwrap();
    assert_eq!(canonicalize(root), canonicalize(&root.clone()));
}

#[test]
fn single_character_text_change_alters_a_leaf() {
    let baseline = leaves_of(&article());
    let mut mutated = article();
    mutated["content"][0]["content"][0] = json!("Release notez");
    assert_ne!(baseline, leaves_of(&mutated));
}

#[test]
fn attribute_value_change_alters_a_leaf() {
    let baseline = leaves_of(&article());
    let mut mutated = article();
    mutated["attributes"]["id"] = json!("post-8");
    assert_ne!(baseline, leaves_of(&mutated));
}

#[test]
fn structural_change_alters_a_leaf() {
    let baseline = leaves_of(&article());
    let mut mutated = article();
    mutated["content"][1]["type"] = json!("div");
    assert_ne!(baseline, leaves_of(&mutated));
}

#[test]
fn identical_siblings_are_disambiguated() {
    let leaves = leaves_of(&article());
    let repeated: Vec<_> = leaves
        .iter()
        .filter(|leaf| leaf.ends_with(":AnotherOne"))
        .collect();
    assert_eq!(repeated.len(), 4);
    for (i, leaf) in repeated.iter().enumerate() {
        let n = i + 1;
        assert_eq!(
            **leaf,
            format!("article:1[class=entry,id=post-7]>p:{n}:{n}:AnotherOne")
        );
    }
    let mut unique = leaves.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), leaves.len());
}

#[test]
fn attribute_insertion_order_does_not_matter() {
    let ba = Element::new("x")
        .with_attribute("b", "2")
        .with_attribute("a", "1")
        .with_content(vec![Node::text("t")]);
    let ab = Element::new("x")
        .with_attribute("a", "1")
        .with_attribute("b", "2")
        .with_content(vec![Node::text("t")]);
    assert_eq!(canonicalize(&ba), canonicalize(&ab));
    assert_eq!(canonicalize(&ab).to_strings(), vec!["x:1:1[a=1,b=2]:t"]);

    let from_json = leaves_of(&json!({"type": "x", "attributes": {"b": "2", "a": "1"}, "content": "t"}));
    assert_eq!(from_json, vec!["x:1:1[a=1,b=2]:t"]);
}

#[test]
fn keyword_matching_is_case_insensitive_and_first_wins() {
    let p = Element::new("p").with_content(vec![Node::text("Hello World Item")]);
    let found = locate(&p, &["World".to_string(), "Item".to_string()]);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].keyword, "World");

    let found = locate(&p, &["ITEM".to_string(), "world".to_string()]);
    assert_eq!(found[0].keyword, "ITEM");
}

#[test]
fn keyword_extraction_example() {
    let doc = Document::from_value(&json!({
        "type": "html",
        "content": [{"type": "head", "content": [
            {"type": "meta", "attributes": {"name": "keywords", "content": "world, item"}}
        ]}]
    }));
    assert_eq!(doc.keywords(), vec!["world", "item"]);
}

#[test]
fn missing_keywords_yield_empty_results() {
    let doc = Document::from_value(&article());
    assert!(doc.keywords().is_empty());
    assert!(doc.locate(&doc.keywords()).is_empty());
}

#[test]
fn match_paths_equal_leaf_paths() {
    let doc = Document::from_value(&article());
    let leaves = doc.leaves();
    let matches = doc.locate(&["more".to_string(), "another".to_string()]);
    assert_eq!(matches.len(), 5);
    for record in &matches {
        let hits: Vec<_> = leaves.find_by_path(&record.canonical_path).collect();
        assert_eq!(hits.len(), 1, "no leaf for {}", record.canonical_path);
        assert_eq!(hits[0].1.encoded(), record.full_tag());
    }
}

#[test]
fn malformed_subtrees_are_skipped_not_fatal() {
    let doc = Document::from_value(&json!({
        "type": "div",
        "content": [
            {"content": ["lost"]},
            {"type": "span", "content": ["kept"]},
            null,
            {"type": "span", "content": ["also kept"]}
        ]
    }));
    assert_eq!(
        doc.leaves().to_strings(),
        vec!["div:1>span:1:1:kept", "div:1>span:2:2:alsokept"]
    );
    assert!(!doc.report().is_clean());
}

#[test]
fn non_object_root_yields_nothing() {
    let doc = Document::from_value(&json!("just text"));
    assert!(doc.leaves().is_empty());
    assert!(doc.keywords().is_empty());
    assert!(doc.locate(&["text".to_string()]).is_empty());
}

#[test]
fn auxiliary_fields_contribute_leaves() {
    let leaves = leaves_of(&json!({
        "type": "html",
        "content": [{"type": "body", "content": ["main"]}],
        "sidebar": {"type": "aside", "content": ["extra"]}
    }));
    assert_eq!(leaves, vec!["html:1>body:1:1:main", "html:1>aside:1:1:extra"]);
}

#[test]
fn reserved_characters_in_attributes_cannot_collide() {
    let packed = Element::new("x")
        .with_attribute("a", "1,b=2")
        .with_content(vec![Node::text("t")]);
    let split = Element::new("x")
        .with_attribute("a", "1")
        .with_attribute("b", "2")
        .with_content(vec![Node::text("t")]);
    assert_ne!(canonicalize(&packed), canonicalize(&split));
    assert_eq!(canonicalize(&packed).to_strings(), vec![r"x:1:1[a=1\,b\=2]:t"]);
    assert_eq!(canonicalize(&split).to_strings(), vec!["x:1:1[a=1,b=2]:t"]);
}

#[test]
fn reserved_characters_in_tags_cannot_forge_segments() {
    let nested = leaves_of(&json!({
        "type": "a",
        "content": [{"type": "b", "content": ["t"]}]
    }));
    let forged = leaves_of(&json!({"type": "a:1>b", "content": ["t"]}));
    assert_eq!(nested, vec!["a:1>b:1:1:t"]);
    assert_eq!(forged, vec![r"a\:1\>b:1:1:t"]);
    assert_ne!(nested, forged);
}

#[test]
fn auxiliary_matches_point_at_auxiliary_leaves() {
    let doc = Document::from_value(&json!({
        "type": "html",
        "content": [{"type": "body", "content": ["hello"]}],
        "sidebar": {"type": "aside", "content": ["world"]}
    }));
    let matches = doc.locate(&["world".to_string()]);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].canonical_path, "html:1>aside:1:1");

    let leaves = doc.leaves();
    let hits: Vec<_> = leaves.find_by_path(&matches[0].canonical_path).collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0, 1);
    assert_eq!(hits[0].1.encoded(), "html:1>aside:1:1:world");
    assert_eq!(hits[0].1.encoded(), matches[0].full_tag());
}
