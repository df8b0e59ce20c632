//! Canonicalize command implementation.

use crate::input::load_document;
use crate::output::format_json;

pub fn run(input: Option<String>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let document = load_document(input.as_deref())?;
    let leaves = document.leaves().to_strings();

    if json {
        println!("{}", format_json(&leaves));
    } else {
        for leaf in &leaves {
            println!("{}", leaf);
        }
    }
    Ok(())
}
