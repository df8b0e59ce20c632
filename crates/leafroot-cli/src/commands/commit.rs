//! Commit command implementation.

use crate::input::load_document;
use crate::output::format_json;
use leafroot_commit::{Commitment, MerkleTree};

pub fn run(input: Option<String>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let document = load_document(input.as_deref())?;
    let tree = MerkleTree::build(document.leaves().to_strings())
        .map_err(|e| format!("Commitment failed: {}", e))?;
    let commitment = Commitment::from(&tree);

    if json {
        println!("{}", format_json(&commitment));
    } else {
        println!("root {}", commitment.root);
        for (i, leaf) in commitment.leaves.iter().enumerate() {
            println!("{:>4} {}", i, leaf);
        }
    }
    Ok(())
}
