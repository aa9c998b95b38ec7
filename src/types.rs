//! Shared types for canvas-mirror.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// File extension of canvas source documents.
pub const CANVAS_EXTENSION: &str = ".canvas";

/// File extension of generated mirror documents.
pub const MIRROR_EXTENSION: &str = ".md";

/// One visual element of a canvas document.
///
/// Canvas files carry more node kinds (groups, links, ...) and more fields
/// (positions, sizes, colors); everything beyond `text` and `file` nodes is
/// irrelevant to mirroring and folds into [`CanvasNode::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CanvasNode {
    /// A free-text card.
    Text { text: String },

    /// A reference to another file in the vault.
    File { file: String },

    /// Any other node kind; ignored by the pipeline.
    #[serde(other)]
    Other,
}

impl CanvasNode {
    /// Returns the card text if this is a text node.
    pub fn text(&self) -> Option<&str> {
        match self {
            CanvasNode::Text { text } => Some(text),
            _ => None,
        }
    }

    /// Returns the referenced file path if this is a file node.
    pub fn file(&self) -> Option<&str> {
        match self {
            CanvasNode::File { file } => Some(file),
            _ => None,
        }
    }
}

/// Creation and modification times copied from a source file.
///
/// Stamped onto the generated mirror so host-side "modified" ordering stays
/// stable across regenerations even though content is rewritten every run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStat {
    pub created: Option<SystemTime>,
    pub modified: Option<SystemTime>,
}

impl FileStat {
    pub fn modified_rfc3339(&self) -> Option<String> {
        self.modified
            .map(|t| chrono::DateTime::<chrono::Utc>::from(t).to_rfc3339())
    }

    pub fn created_rfc3339(&self) -> Option<String> {
        self.created
            .map(|t| chrono::DateTime::<chrono::Utc>::from(t).to_rfc3339())
    }
}

/// A parsed canvas source document.
///
/// Constructed fresh per run from the vault's file listing; never mutated
/// after construction.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// File name including the `.canvas` extension.
    pub name: String,

    /// Path relative to the vault root.
    pub path: PathBuf,

    /// Nodes in visual/document order. Order is preserved for deterministic
    /// text concatenation.
    pub nodes: Vec<CanvasNode>,

    /// Timestamps copied from the source file.
    pub stat: FileStat,
}

/// Key-value properties extracted from canvas card text.
///
/// Keys are lower-case identifier-like strings. Insertion order is
/// irrelevant; the sorted map keeps rendered front-matter deterministic.
pub type Props = BTreeMap<String, String>;

/// The derived, render-ready representation of one canvas.
#[derive(Debug, Clone)]
pub struct Mirror {
    /// Source file name including the `.canvas` extension.
    pub name: String,

    /// Source nodes, retained for the empty-canvas check.
    pub nodes: Vec<CanvasNode>,

    /// Timestamps copied from the source file.
    pub stat: FileStat,

    /// Rewritten outgoing links, duplicates preserved.
    pub links: Vec<String>,

    /// Tags in extraction order.
    pub tags: Vec<String>,

    /// All card texts joined by a blank line, in node order.
    pub text: String,

    /// Extracted key-value properties.
    pub props: Props,
}

/// Summary of a detected canvas, for CLI listings.
#[derive(Debug, Clone, Serialize)]
pub struct CanvasInfo {
    pub path: String,
    pub name: String,
    pub text_nodes: usize,
    pub file_nodes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

impl CanvasInfo {
    pub fn from_canvas(canvas: &Canvas) -> Self {
        Self {
            path: canvas.path.to_string_lossy().to_string(),
            name: canvas.name.clone(),
            text_nodes: canvas
                .nodes
                .iter()
                .filter(|n| matches!(n, CanvasNode::Text { .. }))
                .count(),
            file_nodes: canvas
                .nodes
                .iter()
                .filter(|n| matches!(n, CanvasNode::File { .. }))
                .count(),
            modified: canvas.stat.modified_rfc3339(),
            created: canvas.stat.created_rfc3339(),
        }
    }
}

/// Read a [`FileStat`] from an on-disk file.
pub fn stat_of(path: &Path) -> Result<FileStat> {
    let metadata = std::fs::metadata(path)?;
    Ok(FileStat {
        created: metadata.created().ok(),
        modified: metadata.modified().ok(),
    })
}
