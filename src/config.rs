//! Per-user configuration paths

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the colab-helper configuration directory (~/.colab-cli/)
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".colab-cli"))
}

/// Get the configuration file path (~/.colab-cli/config.json)
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Get the recent-notebooks file path (~/.colab-cli/recent.json)
pub fn recent_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("recent.json"))
}

/// Get the conventional Google Drive sync folder (~/Google Drive)
///
/// Used as the drive root when `default_drive_folder` is not configured.
pub fn google_drive_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join("Google Drive"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_resolve() {
        // These should not panic
        let _ = config_dir();
        let _ = config_file();
        let _ = recent_file();
        let _ = google_drive_dir();
    }

    #[test]
    fn test_files_live_under_config_dir() {
        let dir = config_dir().unwrap();
        assert!(config_file().unwrap().starts_with(&dir));
        assert!(recent_file().unwrap().starts_with(&dir));
    }
}
