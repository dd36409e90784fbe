//! Open command - Open a notebook in Google Colab

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;

use crate::colab::browser::{BrowserLauncher, LaunchTarget, SystemBrowser};
use crate::colab::recent::RecentList;
use crate::colab::resolve;
use crate::colab::settings::ConfigStore;
use crate::config;

/// Execute the open command
pub fn execute(path: &str, new_window: bool) -> Result<()> {
    let store = ConfigStore::new(config::config_file()?);
    store.ensure_initialized()?;
    let settings = store.load()?;

    let recent = RecentList::new(config::recent_file()?);
    recent.ensure_initialized()?;

    let launcher = SystemBrowser::from_config(&settings.browser_path);
    let target = if new_window {
        LaunchTarget::NewWindow
    } else {
        LaunchTarget::NewTab
    };
    let drive_root = resolve::drive_root(&settings)?;

    open_notebook(path, target, &drive_root, &recent, &launcher)
}

/// Resolve the URL, launch the browser, record recency - in that order.
///
/// Recency is recorded whenever a URL was resolved, even if the browser
/// launch failed; the launch failure is reported as a warning only.
fn open_notebook(
    raw_path: &str,
    target: LaunchTarget,
    drive_root: &Path,
    recent: &RecentList,
    launcher: &dyn BrowserLauncher,
) -> Result<()> {
    let path = resolve::expand_path(raw_path)?;
    let resolution = resolve::resolve_notebook_url(&path, drive_root)?;

    if resolution.needs_upload {
        println!("Will upload local notebook: {}", path.display());
        println!(
            "{}",
            "The upload page will open; select the file there manually.".dimmed()
        );
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    println!("Opening notebook in Colab: {}", name.green());

    if let Err(err) = launcher.open(&resolution.url, target) {
        eprintln!("{} {:#}", "Warning:".yellow(), err);
        eprintln!("Open this URL manually: {}", resolution.url);
    }

    recent
        .add(&path.to_string_lossy())
        .context("Failed to update recent notebooks")?;

    Ok(())
}
