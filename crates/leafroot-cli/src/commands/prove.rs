//! Prove command implementation.

use crate::input::load_document;
use crate::output::format_json;
use leafroot_commit::{InclusionBundle, MerkleTree};

pub fn run(
    input: Option<String>,
    leaf: Option<String>,
    path: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = load_document(input.as_deref())?;
    let leaves = document.leaves();
    let tree = MerkleTree::build(leaves.to_strings())
        .map_err(|e| format!("Commitment failed: {}", e))?;

    let bundles = match (leaf, path) {
        (Some(leaf), _) => vec![InclusionBundle::prove(&tree, &leaf)?],
        (None, Some(path)) => {
            let mut bundles = Vec::new();
            for (index, _) in leaves.find_by_path(&path) {
                bundles.push(InclusionBundle::prove_index(&tree, index)?);
            }
            if bundles.is_empty() {
                return Err(format!("No leaves under path {}", path).into());
            }
            bundles
        }
        (None, None) => return Err("Either --leaf or --path is required".into()),
    };

    if bundles.len() == 1 {
        println!("{}", format_json(&bundles[0]));
    } else {
        println!("{}", format_json(&bundles));
    }
    Ok(())
}
