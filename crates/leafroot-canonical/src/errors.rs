use thiserror::Error;

/// Widest slice of the offending line quoted in a parse error.
const FRAGMENT_WIDTH: usize = 40;

/// Errors raised while loading a document tree.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The input is not valid JSON.
    #[error("invalid document JSON at line {line}, column {column}: {message} (near `{fragment}`)")]
    InvalidJson {
        /// 1-based line of the failure.
        line: usize,
        /// 1-based column of the failure.
        column: usize,
        /// Parser message.
        message: String,
        /// Input text surrounding the failure.
        fragment: String,
    },
}

impl ParseError {
    pub(crate) fn from_json(err: serde_json::Error, input: &str) -> Self {
        let line = err.line();
        let column = err.column();
        let fragment = fragment_at(input, line, column);
        ParseError::InvalidJson {
            line,
            column,
            message: err.to_string(),
            fragment,
        }
    }
}

/// Quotes up to [`FRAGMENT_WIDTH`] characters of `input` ending near `line:column`.
fn fragment_at(input: &str, line: usize, column: usize) -> String {
    let Some(text) = input.lines().nth(line.saturating_sub(1)) else {
        return String::new();
    };
    let chars: Vec<char> = text.chars().collect();
    let end = column.min(chars.len());
    let start = end.saturating_sub(FRAGMENT_WIDTH);
    chars[start..end].iter().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_quotes_the_offending_line() {
        let input = "{\n  \"type\": \"ul\",\n  \"content\": [oops]\n}";
        let err = serde_json::from_str::<serde_json::Value>(input).unwrap_err();
        let parse_err = ParseError::from_json(err, input);
        let ParseError::InvalidJson { line, fragment, .. } = &parse_err;
        assert_eq!(*line, 3);
        assert!(fragment.contains("\"content\""), "fragment: {}", fragment);
        assert!(parse_err.to_string().contains("line 3"));
    }

    #[test]
    fn fragment_is_empty_past_end_of_input() {
        assert_eq!(fragment_at("{}", 5, 1), "");
    }
}
