//! Host ignore-filter access and the mirror exclusion toggle.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Narrow interface over the host's ignore-filter list.
///
/// The host keeps the list inside a larger configuration blob; orchestrator
/// and toggle code only ever need get/set of the list itself, so that is
/// all this trait exposes.
pub trait IgnoreStore {
    /// Read the ignore-filter list. An absent blob yields an empty list.
    fn ignore_filters(&self) -> Result<Vec<String>>;

    /// Persist an updated ignore-filter list.
    fn set_ignore_filters(&self, filters: Vec<String>) -> Result<()>;
}

/// True when `path` starts with any of the ignore prefixes.
///
/// Raw string-prefix semantics, matching the host: a prefix "Notes" also
/// excludes "Notes2/foo.canvas".
pub fn is_ignored(path: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|prefix| path.starts_with(prefix))
}

/// Flip whether `destination` is excluded from future scans.
///
/// Removes the destination from the filter list if present (returns
/// `true`: mirrors are indexed again), adds it otherwise (returns
/// `false`). A pure flip: calling twice restores the original list. The
/// read-then-write is unlocked; concurrent toggles race last-write-wins.
pub fn toggle_exclusion(store: &dyn IgnoreStore, destination: &str) -> Result<bool> {
    let mut filters = store.ignore_filters()?;

    let enabled = if let Some(pos) = filters.iter().position(|f| f == destination) {
        filters.remove(pos);
        true
    } else {
        filters.push(destination.to_string());
        false
    };

    store.set_ignore_filters(filters)?;
    Ok(enabled)
}

/// The subset of the host's `app.json` this crate touches.
///
/// Unknown keys are round-tripped so the rest of the host's settings
/// survive a write.
#[derive(Debug, Default, Serialize, Deserialize)]
struct AppConfig {
    #[serde(rename = "userIgnoreFilters", default)]
    user_ignore_filters: Vec<String>,

    #[serde(flatten)]
    rest: serde_json::Map<String, serde_json::Value>,
}

/// [`IgnoreStore`] backed by the host's JSON configuration file.
#[derive(Debug, Clone)]
pub struct AppConfigStore {
    path: PathBuf,
}

impl AppConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Result<AppConfig> {
        if !self.path.is_file() {
            return Ok(AppConfig::default());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string(config)?)?;
        Ok(())
    }
}

impl IgnoreStore for AppConfigStore {
    fn ignore_filters(&self) -> Result<Vec<String>> {
        Ok(self.read()?.user_ignore_filters)
    }

    fn set_ignore_filters(&self, filters: Vec<String>) -> Result<()> {
        let mut config = self.read()?;
        config.user_ignore_filters = filters;
        self.write(&config)
    }
}
