//! User configuration for the CLI.

use crate::error::{MirrorError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_destination() -> String {
    "mirrors".to_string()
}

/// Configuration loaded from `<config dir>/canvas-mirror/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default vault path, used when `--vault` is not given.
    #[serde(default)]
    pub vault: Option<PathBuf>,

    /// Destination folder for mirrors, relative to the vault root.
    #[serde(default = "default_destination")]
    pub destination: String,

    /// Prefix for mirror file names, e.g. "+ " to float mirrors to the
    /// top of host file listings.
    #[serde(default)]
    pub name_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vault: None,
            destination: default_destination(),
            name_prefix: String::new(),
        }
    }
}

impl Config {
    /// Default config file location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("canvas-mirror").join("config.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// A missing file yields defaults; a malformed file is an error.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Resolve the vault path, preferring the CLI override.
    pub fn resolve_vault_path(&self, cli_vault: Option<&Path>) -> Result<PathBuf> {
        cli_vault
            .map(Path::to_path_buf)
            .or_else(|| self.vault.clone())
            .ok_or_else(|| {
                MirrorError::Config(
                    "no vault path given; pass --vault or set `vault` in the config file"
                        .to_string(),
                )
            })
    }
}
