//! Inline property parsing ([key::value] and (key::value)).

use crate::types::Props;
use regex::Regex;
use std::sync::LazyLock;

// Property annotation: an opening bracket or paren, a lower-case key,
// "::", a non-greedy value, and a closing bracket or paren. The delimiter
// kinds are not required to match each other: "[status::done)" parses.
// That asymmetry is an accepted quirk of the grammar, pinned by tests.
static PROPERTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\[(]([a-z_-]+?)::(.*?)[\])]").unwrap());

/// Extract `key::value` annotations from the given text blocks.
///
/// Later occurrences of the same key overwrite earlier ones, in extraction
/// order. Values are whitespace-trimmed. No escaping is supported: a value
/// containing a closing delimiter as a literal character truncates early.
pub fn extract_props<S: AsRef<str>>(texts: &[S]) -> Props {
    let mut props = Props::new();

    for text in texts {
        for cap in PROPERTY.captures_iter(text.as_ref()) {
            let key = cap[1].to_string();
            let value = cap[2].trim().to_string();
            props.insert(key, value);
        }
    }

    props
}
