//! Disclose command implementation.
//!
//! Commits the document, locates its keywords and proves every leaf that
//! sits at a matched path.

use crate::input::{load_document, resolve_keywords};
use crate::output::{format_json, format_match_row, print_match_header};
use leafroot_commit::{InclusionBundle, MerkleTree};
use serde_json::json;

pub fn run(
    input: Option<String>,
    keywords: Vec<String>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = load_document(input.as_deref())?;
    let leaves = document.leaves();
    let tree = MerkleTree::build(leaves.to_strings())
        .map_err(|e| format!("Commitment failed: {}", e))?;

    let keywords = resolve_keywords(&document, keywords);
    let matches = document.locate(&keywords);
    tracing::info!(
        leaves = leaves.len(),
        keywords = keywords.len(),
        matches = matches.len(),
        "disclosing keyword matches"
    );

    let mut disclosures = Vec::with_capacity(matches.len());
    for record in &matches {
        let mut bundles = Vec::new();
        for (index, _) in leaves.find_by_path(&record.canonical_path) {
            bundles.push(InclusionBundle::prove_index(&tree, index)?);
        }
        disclosures.push((record, record.fingerprint().to_hex(), bundles));
    }

    if json_output {
        let rows: Vec<_> = disclosures
            .iter()
            .map(|(record, fingerprint, bundles)| {
                json!({
                    "keyword": record.keyword,
                    "full_tag": record.full_tag(),
                    "fingerprint": fingerprint,
                    "bundles": bundles,
                })
            })
            .collect();
        println!(
            "{}",
            format_json(&json!({
                "root": tree.root(),
                "leaves": tree.leaves(),
                "disclosures": rows,
            }))
        );
        return Ok(());
    }

    println!("root {}", tree.root());
    for (i, leaf) in tree.leaves().iter().enumerate() {
        println!("{:>4} {}", i, leaf);
    }
    println!();
    print_match_header();
    for (record, fingerprint, bundles) in &disclosures {
        println!("{}", format_match_row(record, fingerprint));
        for bundle in bundles {
            println!(
                "    leaf #{} proven with {} steps: {}",
                bundle.proof.index,
                bundle.proof.steps.len(),
                if bundle.verify() { "Ok" } else { "Invalid" }
            );
        }
    }
    Ok(())
}
