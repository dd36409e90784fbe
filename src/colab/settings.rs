//! Configuration store
//!
//! A single JSON record at ~/.colab-cli/config.json with a fixed key set.
//! The key set is closed: `ConfigKey` enumerates every valid key, so an
//! unknown key fails at parse time instead of silently growing the record.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use super::error::ColabError;

/// Mask shown in place of a non-empty auth token
pub const TOKEN_MASK: &str = "***********";

/// The fixed set of configuration keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    DefaultDriveFolder,
    BrowserPath,
    AuthToken,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 3] = [
        ConfigKey::DefaultDriveFolder,
        ConfigKey::BrowserPath,
        ConfigKey::AuthToken,
    ];

    /// Comma-separated key names, used in the UnknownKey message
    pub const VALID_KEYS: &'static str = "default_drive_folder, browser_path, auth_token";

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::DefaultDriveFolder => "default_drive_folder",
            ConfigKey::BrowserPath => "browser_path",
            ConfigKey::AuthToken => "auth_token",
        }
    }
}

impl FromStr for ConfigKey {
    type Err = ColabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default_drive_folder" => Ok(ConfigKey::DefaultDriveFolder),
            "browser_path" => Ok(ConfigKey::BrowserPath),
            "auth_token" => Ok(ConfigKey::AuthToken),
            other => Err(ColabError::UnknownKey(other.to_string())),
        }
    }
}

impl std::fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The on-disk configuration record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_drive_folder: String,
    pub browser_path: String,
    pub auth_token: String,
}

impl Settings {
    /// Raw value for a key
    pub fn value(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::DefaultDriveFolder => &self.default_drive_folder,
            ConfigKey::BrowserPath => &self.browser_path,
            ConfigKey::AuthToken => &self.auth_token,
        }
    }

    pub fn set_value(&mut self, key: ConfigKey, value: &str) {
        match key {
            ConfigKey::DefaultDriveFolder => self.default_drive_folder = value.to_string(),
            ConfigKey::BrowserPath => self.browser_path = value.to_string(),
            ConfigKey::AuthToken => self.auth_token = value.to_string(),
        }
    }

    /// Value for display. A non-empty auth token is masked; everything else
    /// is shown raw. Programmatic callers use `value()` instead.
    pub fn display_value(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::AuthToken if !self.auth_token.is_empty() => TOKEN_MASK,
            other => self.value(other),
        }
    }
}

/// Store for the configuration record
///
/// Constructed with an explicit file path so tests can point it at a
/// temporary directory instead of the real per-user location.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create the record with all values empty if it does not exist.
    /// Safe to call on every startup.
    pub fn ensure_initialized(&self) -> Result<(), ColabError> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        self.save(&Settings::default())
    }

    /// Load the record. Strict: invalid JSON is an error, never repaired.
    pub fn load(&self) -> Result<Settings, ColabError> {
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|source| ColabError::StorageCorrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the record. Plain write, not atomic; the tool is
    /// single-shot and concurrent invocations are last-writer-wins.
    pub fn save(&self, settings: &Settings) -> Result<(), ColabError> {
        let content = serde_json::to_string_pretty(settings)
            .map_err(|e| ColabError::Io(std::io::Error::other(e)))?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Update a single key and persist
    pub fn set(&self, key: ConfigKey, value: &str) -> Result<(), ColabError> {
        let mut settings = self.load()?;
        settings.set_value(key, value);
        self.save(&settings)
    }

    /// Read a single key's raw value
    pub fn get(&self, key: ConfigKey) -> Result<String, ColabError> {
        Ok(self.load()?.value(key).to_string())
    }
}
