//! Recently opened notebooks
//!
//! A JSON array of path strings at ~/.colab-cli/recent.json, most recently
//! used first, capped at 10 entries with no duplicates. Reads fail soft to
//! an empty list: recency data is non-critical, unlike the config record.

use std::fs;
use std::path::PathBuf;

use super::error::ColabError;

/// Maximum number of entries retained
pub const MAX_RECENT: usize = 10;

/// Store for the recent-notebooks list
#[derive(Debug, Clone)]
pub struct RecentList {
    path: PathBuf,
}

impl RecentList {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create an empty list on disk if absent. Idempotent.
    pub fn ensure_initialized(&self) -> Result<(), ColabError> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        self.persist(&[])
    }

    /// All entries, MRU-first. A missing or unreadable file degrades to an
    /// empty list rather than erroring.
    pub fn get_all(&self) -> Vec<String> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Move `path` to the front of the list, dropping any existing
    /// occurrence, and truncate to the cap. Exact string match only; path
    /// normalization happens before this layer.
    pub fn add(&self, path: &str) -> Result<(), ColabError> {
        let mut recent = self.get_all();
        recent.retain(|entry| entry != path);
        recent.insert(0, path.to_string());
        recent.truncate(MAX_RECENT);
        self.persist(&recent)
    }

    /// The first `min(count, len)` entries. Always a prefix of `get_all()`.
    pub fn list(&self, count: usize) -> Vec<String> {
        let mut recent = self.get_all();
        recent.truncate(count);
        recent
    }

    fn persist(&self, entries: &[String]) -> Result<(), ColabError> {
        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| ColabError::Io(std::io::Error::other(e)))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
