//! Text normalization.
//!
//! Turns raw document text into the canonical lowercase token sequence
//! every scorer consumes. Both scores are computed over the output of this
//! one function, so the pipeline normalizes each document exactly once.

/// Normalize raw text into lowercase word tokens.
///
/// The transformation, in order: drop every character that is neither
/// alphanumeric nor whitespace, drop the numeric characters, lowercase,
/// split on whitespace runs. The two drops compose to "keep Unicode
/// letters and whitespace", with `char::is_alphabetic` as the character
/// class of record, so underscores count as punctuation and every Unicode
/// digit is removed. Characters removed between letters merge their
/// neighbors: `"abc-123-def"` becomes the single token `"abcdef"`.
///
/// Total over any input. Empty, numeric-only, and symbol-only strings
/// yield an empty vector, never an error.
pub fn normalize(text: &str) -> Vec<String> {
    let mut kept = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphabetic() || c.is_whitespace() {
            kept.push(c);
        }
    }
    kept.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
