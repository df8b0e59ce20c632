//! Locate command implementation.

use crate::input::{load_document, resolve_keywords};
use crate::output::{format_json, format_match_row, print_match_header};
use serde_json::json;

pub fn run(
    input: Option<String>,
    keywords: Vec<String>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = load_document(input.as_deref())?;
    let keywords = resolve_keywords(&document, keywords);
    let matches = document.locate(&keywords);

    if json_output {
        let mut rows = Vec::with_capacity(matches.len());
        for record in &matches {
            rows.push(json!({
                "keyword": record.keyword,
                "canonical_path": record.canonical_path,
                "aggregated_text": record.aggregated_text,
                "full_tag": record.full_tag(),
                "fingerprint": record.fingerprint().to_hex(),
            }));
        }
        println!("{}", format_json(&rows));
    } else {
        print_match_header();
        for record in &matches {
            println!("{}", format_match_row(record, &record.fingerprint().to_hex()));
        }
    }
    Ok(())
}
