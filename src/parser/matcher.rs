//! Flat match extraction across a sequence of text blocks.

use regex::Regex;

/// Find all non-overlapping matches of `pattern` in each block, left to
/// right, and flatten them into one sequence in block order.
///
/// A block with no matches contributes nothing. Always returns, possibly
/// empty; no error conditions.
pub fn extract_matches<S: AsRef<str>>(texts: &[S], pattern: &Regex) -> Vec<String> {
    texts
        .iter()
        .flat_map(|text| {
            pattern
                .find_iter(text.as_ref())
                .map(|m| m.as_str().to_string())
                .collect::<Vec<_>>()
        })
        .collect()
}
