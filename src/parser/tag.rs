//! Tag grammar (#tag and #tag/subtag).

use crate::parser::link::strip_links;
use crate::parser::matcher::extract_matches;
use regex::Regex;
use std::sync::LazyLock;

// Lower-case tags only, with / for nesting. Intentionally narrower than
// the host's full tag syntax; mirrors index a curated subset.
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#[a-z_/]+").unwrap());

/// Extract tags from text blocks, in block order.
///
/// Embedded links are stripped from each block first, so link targets and
/// heading anchors never leak into the tag list.
pub fn extract_tags<S: AsRef<str>>(texts: &[S]) -> Vec<String> {
    let sanitized: Vec<String> = texts.iter().map(|t| strip_links(t.as_ref())).collect();
    extract_matches(&sanitized, &TAG)
}
