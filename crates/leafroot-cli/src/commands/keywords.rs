//! Keywords command implementation.

use crate::input::load_document;
use crate::output::format_json;

pub fn run(input: Option<String>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let document = load_document(input.as_deref())?;
    let keywords = document.keywords();

    if json {
        println!("{}", format_json(&keywords));
    } else if keywords.is_empty() {
        eprintln!("No keywords declared");
    } else {
        for keyword in &keywords {
            println!("{}", keyword);
        }
    }
    Ok(())
}
