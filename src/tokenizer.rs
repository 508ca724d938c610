//! Letter-run tokenizer.
//!
//! Splits text on maximal runs of non-letter characters: anything that is
//! not a Unicode letter separates tokens and is discarded. Tokens are
//! case-sensitive. No stemming or stop-word removal is applied. The same
//! pipeline is used for index construction and for document length
//! computation, since scoring depends on the two agreeing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LETTER_RUN: Regex = Regex::new(r"\p{L}+").expect("valid regex");
}

/// Tokenize text into maximal runs of Unicode letters, in order of
/// appearance.
pub fn tokenize(text: &str) -> Vec<&str> {
    LETTER_RUN.find_iter(text).map(|m| m.as_str()).collect()
}
