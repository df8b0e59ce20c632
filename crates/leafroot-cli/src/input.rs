//! Input loading shared by the commands.

use leafroot_canonical::{Document, ParseError};
use std::io::{self, Read};
use thiserror::Error;

/// Failures while reading command input.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read stdin: {0}")]
    Stdin(#[from] io::Error),
    #[error("{origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: ParseError,
    },
}

/// Reads text from a file or stdin.
pub fn read_text(input: Option<&str>) -> Result<String, InputError> {
    match input {
        Some(path) => std::fs::read_to_string(path).map_err(|source| InputError::File {
            path: path.to_string(),
            source,
        }),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Reads and loads a document tree, logging any skipped nodes.
pub fn load_document(input: Option<&str>) -> Result<Document, InputError> {
    let text = read_text(input)?;
    let origin = input.unwrap_or("<stdin>").to_string();
    let document =
        Document::from_json_str(&text).map_err(|source| InputError::Parse { origin: origin.clone(), source })?;

    let report = document.report();
    if !report.is_clean() {
        tracing::warn!(
            input = %origin,
            warnings = ?report.metrics,
            "skipped malformed nodes while loading document"
        );
    }
    Ok(document)
}

/// Keywords from the command line, or the document's declared keywords.
pub fn resolve_keywords(document: &Document, flags: Vec<String>) -> Vec<String> {
    if flags.is_empty() {
        document.keywords()
    } else {
        flags
    }
}
