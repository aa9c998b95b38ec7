//! Vault representation: the filesystem surface the pipeline consumes.

use crate::error::{MirrorError, Result};
use crate::ignore::AppConfigStore;
use crate::types::{FileStat, stat_of};
use glob::glob;
use std::path::{Path, PathBuf};

/// An Obsidian-style vault rooted at a directory.
///
/// Exposes exactly the host-collaborator operations the pipeline needs:
/// file enumeration, raw reads, metadata, folder management, and file
/// creation/deletion with timestamp control.
#[derive(Debug, Clone)]
pub struct Vault {
    /// Root path of the vault.
    pub root: PathBuf,
}

impl Vault {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.is_dir() {
            return Err(MirrorError::VaultNotFound(root));
        }

        Ok(Self { root })
    }

    /// Full path for a vault-relative path.
    pub fn full_path(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    /// The host's configuration store (`.obsidian/app.json`).
    pub fn app_config_store(&self) -> AppConfigStore {
        AppConfigStore::new(self.root.join(".obsidian").join("app.json"))
    }

    /// List every file in the vault, as sorted vault-relative paths.
    ///
    /// Hidden entries (including `.obsidian`) are skipped. Sorting keeps
    /// the enumeration order, and therefore every downstream sequence,
    /// deterministic across runs.
    pub fn list_files(&self) -> Result<Vec<PathBuf>> {
        let pattern = self.root.join("**/*");
        let pattern_str = pattern.to_string_lossy();

        let mut files = Vec::new();

        for entry in glob(&pattern_str)? {
            match entry {
                Ok(path) => {
                    if !path.is_file() {
                        continue;
                    }
                    if let Ok(relative) = path.strip_prefix(&self.root) {
                        if !relative
                            .components()
                            .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
                        {
                            files.push(relative.to_path_buf());
                        }
                    }
                }
                Err(e) => {
                    eprintln!("Warning: glob error: {}", e);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    /// List the files directly under a vault-relative folder (non-recursive).
    pub fn list_folder(&self, relative: &Path) -> Result<Vec<PathBuf>> {
        let full = self.full_path(relative);
        let mut entries = Vec::new();

        for entry in std::fs::read_dir(full)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                entries.push(relative.join(entry.file_name()));
            }
        }

        entries.sort();
        Ok(entries)
    }

    /// Read raw file content.
    ///
    /// A path that no longer resolves to a readable file maps to
    /// [`MirrorError::SourceNotFound`]: the file vanished between listing
    /// and read.
    pub fn read_raw(&self, relative: &Path) -> Result<String> {
        let full = self.full_path(relative);
        std::fs::read_to_string(&full)
            .map_err(|_| MirrorError::SourceNotFound(relative.to_path_buf()))
    }

    /// Read creation/modification times for a file.
    pub fn stat(&self, relative: &Path) -> Result<FileStat> {
        stat_of(&self.full_path(relative))
    }

    pub fn folder_exists(&self, relative: &Path) -> bool {
        self.full_path(relative).is_dir()
    }

    /// Create a folder (and any missing parents). Idempotent.
    pub fn create_folder(&self, relative: &Path) -> Result<()> {
        std::fs::create_dir_all(self.full_path(relative))?;
        Ok(())
    }

    /// Write a file, then stamp it with the given source timestamps.
    ///
    /// Only the modified time can be applied portably; creation time is
    /// owned by the filesystem.
    pub fn create_file_with_stat(&self, relative: &Path, content: &str, stat: FileStat) -> Result<()> {
        let full = self.full_path(relative);

        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&full, content)?;

        if let Some(modified) = stat.modified {
            let file = std::fs::File::options().write(true).open(&full)?;
            file.set_modified(modified)?;
        }

        Ok(())
    }

    /// Delete a file.
    pub fn delete_file(&self, relative: &Path) -> Result<()> {
        std::fs::remove_file(self.full_path(relative))?;
        Ok(())
    }
}
