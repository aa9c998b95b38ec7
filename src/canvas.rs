//! Canvas loading: filtering the vault listing and parsing node graphs.

use crate::error::{MirrorError, Result};
use crate::ignore::is_ignored;
use crate::types::{CANVAS_EXTENSION, Canvas, CanvasNode};
use crate::vault::Vault;
use rayon::prelude::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The only part of the canvas format this crate reads.
#[derive(Debug, Default, Deserialize)]
struct CanvasData {
    #[serde(default)]
    nodes: Vec<CanvasNode>,
}

/// Load every canvas among `source_files`, excluding ignored prefixes.
///
/// A file is included when its name ends with `.canvas` and its path does
/// not start with any ignored prefix. Files are read and parsed in
/// parallel; results come back in input enumeration order, and the first
/// load or parse failure aborts the whole batch.
pub fn load_canvases(
    vault: &Vault,
    source_files: &[PathBuf],
    ignored: &[String],
) -> Result<Vec<Canvas>> {
    source_files
        .iter()
        .filter(|path| {
            let path_str = path.to_string_lossy();
            path_str.ends_with(CANVAS_EXTENSION) && !is_ignored(&path_str, ignored)
        })
        .collect::<Vec<_>>()
        .par_iter()
        .map(|path| load_canvas(vault, path.as_path()))
        .collect()
}

/// Read and parse a single canvas file.
///
/// Empty content is a canvas with no nodes; non-empty content must parse
/// as canvas data (a missing `nodes` field defaults to an empty list).
fn load_canvas(vault: &Vault, path: &Path) -> Result<Canvas> {
    let content = vault.read_raw(path)?;
    let stat = vault.stat(path)?;

    let nodes = if content.trim().is_empty() {
        Vec::new()
    } else {
        let data: CanvasData =
            serde_json::from_str(&content).map_err(|source| MirrorError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        data.nodes
    };

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(Canvas {
        name,
        path: path.to_path_buf(),
        nodes,
        stat,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_vault() -> (TempDir, Vault) {
        let dir = TempDir::new().unwrap();
        let vault = Vault::new(dir.path()).unwrap();
        (dir, vault)
    }

    fn write(vault: &Vault, rel: &str, content: &str) {
        let full = vault.full_path(Path::new(rel));
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    #[test]
    fn test_only_canvas_files_load() {
        let (_dir, vault) = setup_vault();
        write(&vault, "A.canvas", r#"{"nodes":[]}"#);
        write(&vault, "B.md", "not a canvas");

        let files = vault.list_files().unwrap();
        let canvases = load_canvases(&vault, &files, &[]).unwrap();
        assert_eq!(canvases.len(), 1);
        assert_eq!(canvases[0].name, "A.canvas");
    }

    #[test]
    fn test_ignore_prefix_excludes_siblings_too() {
        let (_dir, vault) = setup_vault();
        write(&vault, "Notes/A.canvas", r#"{"nodes":[]}"#);
        write(&vault, "Notes2/B.canvas", r#"{"nodes":[]}"#);
        write(&vault, "Other/C.canvas", r#"{"nodes":[]}"#);

        let files = vault.list_files().unwrap();
        let canvases = load_canvases(&vault, &files, &["Notes".to_string()]).unwrap();
        // "Notes" excludes both Notes/ and Notes2/ (prefix, not segment, match).
        assert_eq!(canvases.len(), 1);
        assert_eq!(canvases[0].name, "C.canvas");
    }

    #[test]
    fn test_empty_content_is_empty_canvas() {
        let (_dir, vault) = setup_vault();
        write(&vault, "Empty.canvas", "");

        let files = vault.list_files().unwrap();
        let canvases = load_canvases(&vault, &files, &[]).unwrap();
        assert_eq!(canvases.len(), 1);
        assert!(canvases[0].nodes.is_empty());
    }

    #[test]
    fn test_missing_nodes_field_defaults_empty() {
        let (_dir, vault) = setup_vault();
        write(&vault, "A.canvas", r#"{"edges":[]}"#);

        let files = vault.list_files().unwrap();
        let canvases = load_canvases(&vault, &files, &[]).unwrap();
        assert!(canvases[0].nodes.is_empty());
    }

    #[test]
    fn test_invalid_content_is_parse_error() {
        let (_dir, vault) = setup_vault();
        write(&vault, "Bad.canvas", "not json at all");

        let files = vault.list_files().unwrap();
        let result = load_canvases(&vault, &files, &[]);
        assert!(matches!(result, Err(MirrorError::Parse { .. })));
    }

    #[test]
    fn test_one_bad_canvas_aborts_the_batch() {
        let (_dir, vault) = setup_vault();
        write(&vault, "Good.canvas", r#"{"nodes":[]}"#);
        write(&vault, "Bad.canvas", "{broken");

        let files = vault.list_files().unwrap();
        assert!(load_canvases(&vault, &files, &[]).is_err());
    }

    #[test]
    fn test_result_order_matches_input_order() {
        let (_dir, vault) = setup_vault();
        for name in ["A.canvas", "B.canvas", "C.canvas", "D.canvas"] {
            write(&vault, name, r#"{"nodes":[]}"#);
        }

        let files = vault.list_files().unwrap();
        let canvases = load_canvases(&vault, &files, &[]).unwrap();
        let names: Vec<&str> = canvases.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A.canvas", "B.canvas", "C.canvas", "D.canvas"]);
    }

    #[test]
    fn test_nodes_parse_with_extra_fields() {
        let (_dir, vault) = setup_vault();
        write(
            &vault,
            "A.canvas",
            r#"{"nodes":[
                {"id":"1","type":"text","text":"hello","x":0,"y":0,"width":10,"height":10},
                {"id":"2","type":"file","file":"B.canvas","x":0,"y":20,"width":10,"height":10},
                {"id":"3","type":"group","label":"g","x":0,"y":40,"width":10,"height":10}
            ],"edges":[]}"#,
        );

        let files = vault.list_files().unwrap();
        let canvases = load_canvases(&vault, &files, &[]).unwrap();
        assert_eq!(
            canvases[0].nodes,
            vec![
                CanvasNode::Text { text: "hello".to_string() },
                CanvasNode::File { file: "B.canvas".to_string() },
                CanvasNode::Other,
            ]
        );
    }
}
