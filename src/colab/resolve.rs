//! Notebook path to Colab URL resolution
//!
//! A path under the local Google Drive sync folder maps to a drive-relative
//! viewer URL; anything else maps to the generic upload page, flagged so the
//! caller can tell the user a manual upload is needed.

use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};

use super::error::ColabError;
use super::settings::Settings;
use crate::config;

/// Base URL for drive-relative notebook links
pub const COLAB_DRIVE_URL: &str = "https://colab.research.google.com/drive";

/// Upload page opened for notebooks outside the drive root
pub const COLAB_UPLOAD_URL: &str = "https://colab.research.google.com/notebook#fileId=upload";

/// Result of resolving a local notebook path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// URL to open in the browser
    pub url: String,
    /// True when the path was outside the drive root and the user must
    /// upload the file manually from the generic upload page
    pub needs_upload: bool,
}

/// Expand a user-supplied path: `~` to the home directory, then relative to
/// absolute against the current directory. Symlinks are left unresolved.
pub fn expand_path(raw: &str) -> Result<PathBuf> {
    let expanded = if raw == "~" {
        dirs::home_dir().context("Could not determine home directory")?
    } else if let Some(rest) = raw.strip_prefix("~/") {
        dirs::home_dir()
            .context("Could not determine home directory")?
            .join(rest)
    } else {
        PathBuf::from(raw)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Ok(cwd.join(expanded))
    }
}

/// The drive root the prefix check runs against: the configured
/// `default_drive_folder` when set, else the conventional ~/Google Drive.
pub fn drive_root(settings: &Settings) -> Result<PathBuf> {
    if settings.default_drive_folder.is_empty() {
        config::google_drive_dir()
    } else {
        expand_path(&settings.default_drive_folder)
    }
}

/// Resolve an absolute, already-expanded notebook path to a Colab URL.
///
/// Fails with `NotFound` when the path does not exist; no URL is computed
/// in that case.
pub fn resolve_notebook_url(path: &Path, drive_root: &Path) -> Result<Resolution, ColabError> {
    if !path.exists() {
        return Err(ColabError::NotFound(path.to_path_buf()));
    }

    match path.strip_prefix(drive_root) {
        Ok(relative) => Ok(Resolution {
            url: format!("{}/{}", COLAB_DRIVE_URL, join_segments(relative)),
            needs_upload: false,
        }),
        Err(_) => Ok(Resolution {
            url: COLAB_UPLOAD_URL.to_string(),
            needs_upload: true,
        }),
    }
}

/// Join path components with `/` regardless of platform separator
fn join_segments(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(seg) => Some(seg.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_path_under_drive_root_maps_to_drive_url() {
        let dir = TempDir::new().unwrap();
        let drive = dir.path().join("Drive");
        fs::create_dir_all(drive.join("a")).unwrap();
        let notebook = drive.join("a").join("b.ipynb");
        fs::write(&notebook, "{}").unwrap();

        let resolution = resolve_notebook_url(&notebook, &drive).unwrap();
        assert_eq!(
            resolution.url,
            "https://colab.research.google.com/drive/a/b.ipynb"
        );
        assert!(!resolution.needs_upload);
    }

    #[test]
    fn test_path_outside_drive_root_needs_upload() {
        let dir = TempDir::new().unwrap();
        let notebook = dir.path().join("local.ipynb");
        fs::write(&notebook, "{}").unwrap();

        let resolution =
            resolve_notebook_url(&notebook, &dir.path().join("Drive")).unwrap();
        assert_eq!(resolution.url, COLAB_UPLOAD_URL);
        assert!(resolution.needs_upload);
    }

    #[test]
    fn test_nonexistent_path_is_not_found() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.ipynb");

        let err = resolve_notebook_url(&missing, dir.path()).unwrap_err();
        assert!(matches!(err, ColabError::NotFound(p) if p == missing));
    }

    #[test]
    fn test_expand_path_makes_relative_absolute() {
        let expanded = expand_path("some/notebook.ipynb").unwrap();
        assert!(expanded.is_absolute());
        assert!(expanded.ends_with("some/notebook.ipynb"));
    }

    #[test]
    fn test_expand_path_keeps_absolute_paths() {
        let expanded = expand_path("/tmp/nb.ipynb").unwrap();
        assert_eq!(expanded, PathBuf::from("/tmp/nb.ipynb"));
    }

    #[test]
    fn test_expand_path_resolves_tilde() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_path("~").unwrap(), home);
        assert_eq!(expand_path("~/nb.ipynb").unwrap(), home.join("nb.ipynb"));
    }

    #[test]
    fn test_drive_root_prefers_configured_folder() {
        let settings = Settings {
            default_drive_folder: "/data/drive".to_string(),
            ..Settings::default()
        };
        assert_eq!(drive_root(&settings).unwrap(), PathBuf::from("/data/drive"));

        let unset = Settings::default();
        assert_eq!(
            drive_root(&unset).unwrap(),
            dirs::home_dir().unwrap().join("Google Drive")
        );
    }
}
