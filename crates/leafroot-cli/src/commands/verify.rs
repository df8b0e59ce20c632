//! Verify command implementation.

use crate::input::read_text;
use leafroot_commit::{Hash, InclusionBundle};
use serde_json::json;

pub fn run(
    bundle: Option<String>,
    root: Option<String>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_text(bundle.as_deref())?;
    let bundle = InclusionBundle::from_json(&text)
        .map_err(|e| format!("Invalid bundle: {}", e))?;

    let root = match root {
        Some(hex) => hex.parse::<Hash>()?,
        None => bundle.root,
    };
    let ok = bundle.verify_against(&root);

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "leaf": bundle.leaf,
                "root": root,
                "verdict": if ok { "Ok" } else { "Invalid" },
            }))?
        );
    } else {
        println!("{} {}", if ok { "Ok" } else { "Invalid" }, bundle.leaf);
    }

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
