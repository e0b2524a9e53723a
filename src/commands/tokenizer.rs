//! Tokenizer for command argument parsing.
//!
//! Splits the text following a matched command into positional raw
//! arguments. Quoted segments may contain spaces:
//! - Without any `"` the remainder is split on single spaces
//! - With a `"` present, a quote touching a space (` "` or `" `) separates arguments
//! - Each argument loses one wrapping quote on either side and is trimmed
//! - Empty arguments are dropped

use regex::Regex;
use std::sync::OnceLock;

const QUOTE_SEPARATOR: &str = r#" "|" "#;

/// Matches a double quote that opens or closes a quoted argument.
fn quote_separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(QUOTE_SEPARATOR).expect("quote separator pattern is valid"))
}

/// Splits an argument string into raw positional arguments.
pub fn tokenize(remainder: &str) -> Vec<String> {
    let pieces: Vec<&str> = if remainder.contains('"') {
        quote_separator().split(remainder).collect()
    } else {
        remainder.split(' ').collect()
    };

    pieces.into_iter().filter_map(clean_token).collect()
}

/// Strips one wrapping quote from each end and trims; drops empty results.
fn clean_token(piece: &str) -> Option<String> {
    let piece = piece.strip_prefix('"').unwrap_or(piece);
    let piece = piece.strip_suffix('"').unwrap_or(piece);
    let piece = piece.trim();

    if piece.is_empty() {
        None
    } else {
        Some(piece.to_string())
    }
}
