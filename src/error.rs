//! Error types and exit codes for canvas-mirror.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes for the CLI.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
    pub const SOURCE_NOT_FOUND: i32 = 3;
    pub const PARSE_ERROR: i32 = 4;
}

/// Main error type for canvas-mirror operations.
#[derive(Error, Debug)]
pub enum MirrorError {
    /// The destination folder (or another required setting) is missing.
    #[error("Config error: {0}")]
    Config(String),

    /// A file vanished between listing and reading it. Fatal for the
    /// whole run; no partial output is written.
    #[error("Source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Canvas content was non-empty but not valid canvas data.
    #[error("Invalid canvas data in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Vault not found at: {}", .0.display())]
    VaultNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),
}

impl MirrorError {
    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            MirrorError::Config(_) => exit_code::CONFIG_ERROR,
            MirrorError::SourceNotFound(_) => exit_code::SOURCE_NOT_FOUND,
            MirrorError::Parse { .. } => exit_code::PARSE_ERROR,
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for canvas-mirror operations.
pub type Result<T> = std::result::Result<T, MirrorError>;
