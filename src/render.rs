//! Mirror rendering: front-matter, references, and body text.

use crate::types::{CANVAS_EXTENSION, Mirror};

/// Tag prefixed to every mirror body, so mirrors are queryable as a set.
pub const MIRROR_TAG: &str = "#mirror";

/// Body marker for a canvas with no nodes.
pub const EMPTY_MARKER: &str = "*empty*";

/// Reference-section marker when there are no tags or links.
pub const NONE_MARKER: &str = "*none*";

/// Render one mirror into its final document string.
///
/// Pure function of the mirror value. The `canvas` property always points
/// back at the source document, overwriting any user-supplied key of that
/// name.
pub fn render(mirror: &Mirror) -> String {
    let mut props = mirror.props.clone();
    props.insert("canvas".to_string(), format!("[[{}]]", mirror.name));

    let mut front_matter = String::from("---\n");
    for (key, value) in &props {
        // Values are always double-quoted; embedded quotes are not escaped.
        front_matter.push_str(&format!("{}: \"{}\"\n", key, value));
    }
    front_matter.push_str("---\n\n");

    if mirror.nodes.is_empty() {
        return format!("{}\n{}\n\n{}\n", front_matter, MIRROR_TAG, EMPTY_MARKER);
    }

    let refs: Vec<String> = mirror
        .tags
        .iter()
        .chain(mirror.links.iter())
        .cloned()
        .collect();
    let refs = bullet(&refs);

    // In-body textual mentions of canvas files read as if mirrors.
    let text = mirror.text.replace(CANVAS_EXTENSION, "");

    format!(
        "{}\n{}\n\n# References\n\n{}\n\n# Text\n\n{}\n",
        front_matter, MIRROR_TAG, refs, text
    )
}

/// Format strings as a bulleted list, or the none-marker when empty.
fn bullet(items: &[String]) -> String {
    if items.is_empty() {
        NONE_MARKER.to_string()
    } else {
        format!("- {}", items.join("\n- "))
    }
}
