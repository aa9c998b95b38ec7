//! The mirror generator: load, transform, clear, write.

use crate::canvas::load_canvases;
use crate::error::{MirrorError, Result};
use crate::ignore::IgnoreStore;
use crate::render::render;
use crate::types::{MIRROR_EXTENSION, Mirror};
use crate::vault::Vault;
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Settings for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateSettings {
    /// Destination folder for mirrors, relative to the vault root.
    pub destination: String,

    /// Optional prefix for mirror file names (e.g. "+ ").
    pub name_prefix: String,
}

/// What a run did, for CLI reporting.
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    /// Mirrors written to the destination.
    pub written: usize,

    /// Stale mirror files scheduled for deletion.
    pub cleared: usize,

    /// Per-file delete/write failures. These do not abort the run.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<String>,
}

/// Orchestrates one full regeneration over a vault.
pub struct Generator<'a> {
    vault: &'a Vault,
    settings: GenerateSettings,
}

impl<'a> Generator<'a> {
    pub fn new(vault: &'a Vault, settings: GenerateSettings) -> Self {
        Self { vault, settings }
    }

    /// Run the whole pipeline: validate, load, transform, clear, write.
    ///
    /// Output is fully regenerated every run, never incrementally updated.
    /// Any canvas failing to load or parse aborts the run before anything
    /// is cleared or written; delete/write failures for individual files
    /// are collected in the report instead.
    pub fn run(&self) -> Result<RunReport> {
        let destination = self.validate()?;

        let ignored = self.vault.app_config_store().ignore_filters()?;
        let files = self.vault.list_files()?;
        let canvases = load_canvases(self.vault, &files, &ignored)?;

        let mirrors: Vec<Mirror> = canvases.into_iter().map(Mirror::from_canvas).collect();

        let stale = self.stale_mirrors(&destination)?;

        // Clearing must finish before any write starts: a fresh mirror
        // often reuses a stale mirror's name, and a delete landing after
        // the overwrite would take the new file with it. Deletions stay
        // unordered among themselves, as do the writes that follow.
        let mut failures: Vec<String> = stale
            .par_iter()
            .filter_map(|path| {
                self.vault
                    .delete_file(path)
                    .err()
                    .map(|e| format!("delete {}: {}", path.display(), e))
            })
            .collect();

        let write_failures: Vec<String> = mirrors
            .par_iter()
            .filter_map(|mirror| {
                let path = destination.join(mirror.output_name(&self.settings.name_prefix));
                let content = render(mirror);
                self.vault
                    .create_file_with_stat(&path, &content, mirror.stat)
                    .err()
                    .map(|e| format!("write {}: {}", path.display(), e))
            })
            .collect();

        let written = mirrors.len() - write_failures.len();
        failures.extend(write_failures);

        Ok(RunReport {
            written,
            cleared: stale.len(),
            failures,
        })
    }

    /// Clearing phase only: delete stale mirrors without regenerating.
    pub fn clear(&self) -> Result<RunReport> {
        let destination = self.validate()?;
        let stale = self.stale_mirrors(&destination)?;

        let mut report = RunReport {
            written: 0,
            cleared: stale.len(),
            failures: Vec::new(),
        };

        report.failures = stale
            .par_iter()
            .filter_map(|path| {
                self.vault
                    .delete_file(path)
                    .err()
                    .map(|e| format!("delete {}: {}", path.display(), e))
            })
            .collect();
        Ok(report)
    }

    /// Destination must be configured; the folder is created if absent.
    fn validate(&self) -> Result<PathBuf> {
        if self.settings.destination.is_empty() {
            return Err(MirrorError::Config(
                "please set a destination folder in your settings".to_string(),
            ));
        }

        let destination = PathBuf::from(&self.settings.destination);
        if !self.vault.folder_exists(&destination) {
            self.vault.create_folder(&destination)?;
        }

        Ok(destination)
    }

    /// Every mirror-extension file directly under the destination.
    fn stale_mirrors(&self, destination: &Path) -> Result<Vec<PathBuf>> {
        Ok(self
            .vault
            .list_folder(destination)?
            .into_iter()
            .filter(|p| p.to_string_lossy().ends_with(MIRROR_EXTENSION))
            .collect())
    }
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

    fn settings(destination: &str) -> GenerateSettings {
        GenerateSettings {
            destination: destination.to_string(),
            name_prefix: String::new(),
        }
    }

    fn write(vault: &Vault, rel: &str, content: &str) {
        let full = vault.full_path(Path::new(rel));
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    #[test]
    fn test_empty_destination_is_config_error() {
        let (_dir, vault) = setup_vault();
        let generator = Generator::new(&vault, settings(""));
        assert!(matches!(generator.run(), Err(MirrorError::Config(_))));
    }

    #[test]
    fn test_destination_created_when_absent() {
        let (_dir, vault) = setup_vault();
        let generator = Generator::new(&vault, settings("mirrors"));
        generator.run().unwrap();
        assert!(vault.folder_exists(Path::new("mirrors")));
    }

    #[test]
    fn test_generate_writes_mirrors() {
        let (_dir, vault) = setup_vault();
        write(
            &vault,
            "A.canvas",
            r#"{"nodes":[{"id":"1","type":"text","text":"Hello [[B]]"},{"id":"2","type":"file","file":"B.canvas"}]}"#,
        );

        let generator = Generator::new(&vault, settings("mirrors"));
        let report = generator.run().unwrap();
        assert_eq!(report.written, 1);
        assert!(report.failures.is_empty());

        let content =
            std::fs::read_to_string(vault.full_path(Path::new("mirrors/A.md"))).unwrap();
        assert!(content.contains("canvas: \"[[A.canvas]]\""));
        assert!(content.contains("- [[B]]\n- [[B]]"));
        assert!(content.contains("Hello [[B]]"));
    }

    #[test]
    fn test_prefix_applied_to_output_names() {
        let (_dir, vault) = setup_vault();
        write(&vault, "A.canvas", r#"{"nodes":[]}"#);

        let generator = Generator::new(
            &vault,
            GenerateSettings {
                destination: "mirrors".to_string(),
                name_prefix: "+ ".to_string(),
            },
        );
        generator.run().unwrap();
        assert!(vault.full_path(Path::new("mirrors/+ A.md")).is_file());
    }

    #[test]
    fn test_stale_mirrors_cleared_while_writing() {
        let (_dir, vault) = setup_vault();
        write(&vault, "A.canvas", r#"{"nodes":[]}"#);
        write(&vault, "mirrors/Removed.md", "stale");
        write(&vault, "mirrors/keep.txt", "not a mirror");

        let generator = Generator::new(&vault, settings("mirrors"));
        let report = generator.run().unwrap();
        assert_eq!(report.cleared, 1);

        assert!(!vault.full_path(Path::new("mirrors/Removed.md")).exists());
        assert!(vault.full_path(Path::new("mirrors/keep.txt")).is_file());
        assert!(vault.full_path(Path::new("mirrors/A.md")).is_file());
    }

    #[test]
    fn test_ignored_canvas_not_mirrored() {
        let (_dir, vault) = setup_vault();
        write(&vault, "Secret/A.canvas", r#"{"nodes":[]}"#);
        write(&vault, "B.canvas", r#"{"nodes":[]}"#);
        write(
            &vault,
            ".obsidian/app.json",
            r#"{"userIgnoreFilters":["Secret"]}"#,
        );

        let generator = Generator::new(&vault, settings("mirrors"));
        let report = generator.run().unwrap();
        assert_eq!(report.written, 1);
        assert!(vault.full_path(Path::new("mirrors/B.md")).is_file());
        assert!(!vault.full_path(Path::new("mirrors/A.md")).exists());
    }

    #[test]
    fn test_destination_not_self_mirrored_when_excluded() {
        let (_dir, vault) = setup_vault();
        write(&vault, "A.canvas", r#"{"nodes":[]}"#);
        write(
            &vault,
            ".obsidian/app.json",
            r#"{"userIgnoreFilters":["mirrors"]}"#,
        );

        let generator = Generator::new(&vault, settings("mirrors"));
        generator.run().unwrap();
        // Second run: the destination's own contents stay excluded.
        let report = generator.run().unwrap();
        assert_eq!(report.written, 1);
    }

    #[test]
    fn test_parse_failure_aborts_before_clearing() {
        let (_dir, vault) = setup_vault();
        write(&vault, "Bad.canvas", "{broken");
        write(&vault, "mirrors/Existing.md", "previous output");

        let generator = Generator::new(&vault, settings("mirrors"));
        assert!(generator.run().is_err());
        // No partial output: the previous mirror survives a failed run.
        assert!(vault.full_path(Path::new("mirrors/Existing.md")).is_file());
    }

    #[test]
    fn test_regeneration_is_deterministic() {
        let (_dir, vault) = setup_vault();
        write(
            &vault,
            "A.canvas",
            r#"{"nodes":[{"id":"1","type":"text","text":"[b::2] [a::1] #t [[X.canvas]]"}]}"#,
        );

        let generator = Generator::new(&vault, settings("mirrors"));
        generator.run().unwrap();
        let first = std::fs::read_to_string(vault.full_path(Path::new("mirrors/A.md"))).unwrap();
        generator.run().unwrap();
        let second = std::fs::read_to_string(vault.full_path(Path::new("mirrors/A.md"))).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_mirror_survives_repeated_regeneration() {
        let (_dir, vault) = setup_vault();
        write(
            &vault,
            "A.canvas",
            r#"{"nodes":[{"id":"1","type":"text","text":"hi"}]}"#,
        );

        let generator = Generator::new(&vault, settings("mirrors"));
        // Every run clears the previous A.md and rewrites it under the
        // same name; the rewrite must never be lost to the clearing.
        for round in 0..50 {
            let report = generator.run().unwrap();
            assert_eq!(report.written, 1, "round {}", round);
            assert!(report.failures.is_empty(), "round {}", round);
            assert!(
                vault.full_path(Path::new("mirrors/A.md")).is_file(),
                "round {}",
                round
            );
        }
    }

    #[test]
    fn test_failed_write_not_counted_as_written() {
        let (_dir, vault) = setup_vault();
        write(&vault, "A.canvas", r#"{"nodes":[]}"#);
        // A directory squatting on the output path makes the write fail.
        vault.create_folder(Path::new("mirrors/A.md")).unwrap();

        let generator = Generator::new(&vault, settings("mirrors"));
        let report = generator.run().unwrap();
        assert_eq!(report.written, 0);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].starts_with("write "));
    }

    #[test]
    fn test_source_modified_time_stamped_on_mirror() {
        let (_dir, vault) = setup_vault();
        write(&vault, "A.canvas", r#"{"nodes":[]}"#);
        let source_stat = vault.stat(Path::new("A.canvas")).unwrap();

        let generator = Generator::new(&vault, settings("mirrors"));
        generator.run().unwrap();

        let mirror_stat = vault.stat(Path::new("mirrors/A.md")).unwrap();
        assert_eq!(mirror_stat.modified, source_stat.modified);
    }

    #[test]
    fn test_clear_only() {
        let (_dir, vault) = setup_vault();
        write(&vault, "mirrors/A.md", "old");
        write(&vault, "mirrors/B.md", "old");

        let generator = Generator::new(&vault, settings("mirrors"));
        let report = generator.clear().unwrap();
        assert_eq!(report.cleared, 2);
        assert_eq!(report.written, 0);
        assert!(!vault.full_path(Path::new("mirrors/A.md")).exists());
    }
}
