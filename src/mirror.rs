//! Canvas-to-mirror transformation.

use crate::parser::{extract_props, extract_tags, resolve_links};
use crate::types::{CANVAS_EXTENSION, Canvas, CanvasNode, MIRROR_EXTENSION, Mirror};

impl Mirror {
    /// Derive the render-ready mirror for one canvas.
    ///
    /// Card texts are the trimmed bodies of text nodes, in node order.
    /// Links, properties, and tags are extracted independently from those
    /// texts; tags see the texts with links stripped first.
    pub fn from_canvas(canvas: Canvas) -> Self {
        let texts: Vec<String> = canvas
            .nodes
            .iter()
            .filter_map(CanvasNode::text)
            .map(|t| t.trim().to_string())
            .collect();

        let links = resolve_links(&canvas.nodes, &texts);
        let props = extract_props(&texts);
        let tags = extract_tags(&texts);
        let text = texts.join("\n\n");

        Self {
            name: canvas.name,
            nodes: canvas.nodes,
            stat: canvas.stat,
            links,
            tags,
            text,
            props,
        }
    }

    /// File name of the generated mirror document.
    ///
    /// The canvas extension is dropped from the source name; an optional
    /// prefix (e.g. "+ ") can push mirrors to the top of host file lists.
    pub fn output_name(&self, prefix: &str) -> String {
        let stem = self.name.replacen(CANVAS_EXTENSION, "", 1);
        format!("{}{}{}", prefix, stem, MIRROR_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileStat;
    use std::path::PathBuf;

    fn canvas(name: &str, nodes: Vec<CanvasNode>) -> Canvas {
        Canvas {
            name: name.to_string(),
            path: PathBuf::from(name),
            nodes,
            stat: FileStat::default(),
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let canvas = canvas(
            "A.canvas",
            vec![
                CanvasNode::Text {
                    text: "Hello [[B]]".to_string(),
                },
                CanvasNode::File {
                    file: "B.canvas".to_string(),
                },
            ],
        );

        let mirror = Mirror::from_canvas(canvas);
        // One embedded, one synthesized; both already .canvas-free.
        assert_eq!(mirror.links, vec!["[[B]]", "[[B]]"]);
        assert_eq!(mirror.text, "Hello [[B]]");
        assert!(mirror.tags.is_empty());
        assert!(mirror.props.is_empty());
    }

    #[test]
    fn test_texts_trimmed_and_joined_in_node_order() {
        let canvas = canvas(
            "A.canvas",
            vec![
                CanvasNode::Text {
                    text: "  first  ".to_string(),
                },
                CanvasNode::Other,
                CanvasNode::Text {
                    text: "second\n".to_string(),
                },
            ],
        );

        let mirror = Mirror::from_canvas(canvas);
        assert_eq!(mirror.text, "first\n\nsecond");
    }

    #[test]
    fn test_props_and_tags_extracted() {
        let canvas = canvas(
            "A.canvas",
            vec![CanvasNode::Text {
                text: "[status::done] #project/x see [[Other]]".to_string(),
            }],
        );

        let mirror = Mirror::from_canvas(canvas);
        assert_eq!(mirror.props.get("status").map(String::as_str), Some("done"));
        assert_eq!(mirror.tags, vec!["#project/x"]);
        assert_eq!(mirror.links, vec!["[[Other]]"]);
    }

    #[test]
    fn test_output_name() {
        let mirror = Mirror::from_canvas(canvas("Plan.canvas", vec![]));
        assert_eq!(mirror.output_name(""), "Plan.md");
        assert_eq!(mirror.output_name("+ "), "+ Plan.md");
    }
}
