//! Link grammar and outgoing-link resolution.

use crate::parser::matcher::extract_matches;
use crate::types::{CANVAS_EXTENSION, CanvasNode};
use regex::Regex;
use std::sync::LazyLock;

// A wiki-link [[target]] or a markdown link [label](target). Non-greedy,
// no nesting; shallow by design.
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[.*?\]\]|\[.*?\]\(.*?\)").unwrap());

/// Extract embedded links from text blocks, in reading order.
pub fn extract_links<S: AsRef<str>>(texts: &[S]) -> Vec<String> {
    extract_matches(texts, &LINK)
}

/// Remove all embedded links from a text block.
///
/// Used to sanitize text before tag extraction, so a link target like
/// `[[Note#heading]]` is never mistaken for a tag.
pub fn strip_links(text: &str) -> String {
    LINK.replace_all(text, "").into_owned()
}

/// Synthesize a wiki-link from a file-reference node's path.
///
/// Keeps only the final path component and strips a trailing `.md`
/// extension, so `Folder/Note.md` becomes `[[Note]]`.
pub fn file_ref_link(path: &str) -> String {
    let name = path.rsplit('/').next().unwrap_or(path);
    let name = name.strip_suffix(".md").unwrap_or(name);
    format!("[[{}]]", name)
}

/// Rewrite a link that points at a canvas file to point at its mirror.
///
/// Drops the first `.canvas` occurrence, matching the host's rename
/// behavior; the mirror shares the canvas's stem.
pub fn rewrite_canvas_link(link: &str) -> String {
    link.replacen(CANVAS_EXTENSION, "", 1)
}

/// Derive the outgoing-link set for one canvas.
///
/// Embedded links from card text come first (preserving the visual reading
/// order), followed by links synthesized from file-reference nodes. Every
/// resulting link is rewritten so canvas targets resolve to mirrors. No
/// deduplication, no validation that targets exist.
pub fn resolve_links<S: AsRef<str>>(nodes: &[CanvasNode], texts: &[S]) -> Vec<String> {
    let embedded = extract_links(texts);

    let synthesized = nodes.iter().filter_map(CanvasNode::file).map(file_ref_link);

    embedded
        .into_iter()
        .chain(synthesized)
        .map(|link| rewrite_canvas_link(&link))
        .collect()
}
